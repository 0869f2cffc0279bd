use kernel::model::profile::{PrivateProfile, PublicProfile};
use sqlx::types::chrono::NaiveDate;

#[derive(sqlx::FromRow)]
pub struct PublicProfileRow {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub preferred_name: Option<String>,
    pub senior_home: Option<String>,
}

impl From<PublicProfileRow> for PublicProfile {
    fn from(value: PublicProfileRow) -> Self {
        let PublicProfileRow {
            first_name,
            last_name,
            preferred_name,
            senior_home,
        } = value;
        PublicProfile {
            first_name,
            last_name,
            preferred_name,
            senior_home,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct PrivateProfileRow {
    pub preferred_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl From<PrivateProfileRow> for PrivateProfile {
    fn from(value: PrivateProfileRow) -> Self {
        let PrivateProfileRow {
            preferred_name,
            email,
            phone_number,
            gender,
            birthday,
        } = value;
        PrivateProfile {
            preferred_name,
            email,
            phone_number,
            gender,
            birthday,
        }
    }
}
