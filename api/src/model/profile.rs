use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    id::UserId,
    profile::{event::UpdateProfile, PrivateProfile, ProfileView, PublicProfile},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[garde(inner(length(min = 1)))]
    pub first_name: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub last_name: Option<String>,
    #[garde(inner(length(min = 1)))]
    pub preferred_name: Option<String>,
    #[garde(inner(email))]
    pub email: Option<String>,
    #[garde(inner(length(min = 7, max = 15)))]
    pub phone_number: Option<String>,
    #[garde(skip)]
    pub gender: Option<String>,
    #[garde(skip)]
    pub birthday: Option<NaiveDate>,
    #[garde(inner(length(min = 1)))]
    pub senior_home: Option<String>,
}

/// A profile request splits back into the two storage partitions; the view
/// the client saw is the merge of what is written here.
impl UpdateProfileRequest {
    pub fn into_event(self, user_id: UserId) -> UpdateProfile {
        let UpdateProfileRequest {
            first_name,
            last_name,
            preferred_name,
            email,
            phone_number,
            gender,
            birthday,
            senior_home,
        } = self;
        UpdateProfile::new(
            user_id,
            PublicProfile {
                first_name,
                last_name,
                preferred_name: preferred_name.clone(),
                senior_home,
            },
            PrivateProfile {
                preferred_name,
                email,
                phone_number,
                gender,
                birthday,
            },
        )
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub preferred_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub senior_home: Option<String>,
}

impl From<ProfileView> for ProfileResponse {
    fn from(value: ProfileView) -> Self {
        let ProfileView {
            first_name,
            last_name,
            preferred_name,
            email,
            phone_number,
            gender,
            birthday,
            senior_home,
        } = value;
        Self {
            first_name,
            last_name,
            preferred_name,
            email,
            phone_number,
            gender,
            birthday,
            senior_home,
        }
    }
}

/// Senior homes whose open slots should trigger a notification email.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmailPreferencesRequest {
    #[garde(inner(length(min = 1)))]
    pub email_preferences: Vec<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailPreferencesResponse {
    pub email_preferences: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_splits_into_both_partitions() {
        let req: UpdateProfileRequest = serde_json::from_str(
            r#"{
                "firstName": "Jordan",
                "preferredName": "Jo",
                "email": "jo@example.com",
                "phoneNumber": "5550001111",
                "seniorHome": "Maple Grove"
            }"#,
        )
        .unwrap();
        let event = req.into_event(UserId::new());

        assert_eq!(event.public.first_name.as_deref(), Some("Jordan"));
        assert_eq!(event.public.senior_home.as_deref(), Some("Maple Grove"));
        assert_eq!(event.private.email.as_deref(), Some("jo@example.com"));
        // preferred name is written to both partitions
        assert_eq!(event.public.preferred_name.as_deref(), Some("Jo"));
        assert_eq!(event.private.preferred_name.as_deref(), Some("Jo"));
    }

    #[test]
    fn blank_home_names_fail_preference_validation() {
        let req: UpdateEmailPreferencesRequest =
            serde_json::from_str(r#"{"emailPreferences": ["Pinegrove Place", ""]}"#).unwrap();
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn clearing_all_preferences_is_allowed() {
        let req: UpdateEmailPreferencesRequest =
            serde_json::from_str(r#"{"emailPreferences": []}"#).unwrap();
        assert!(req.validate(&()).is_ok());
    }
}
