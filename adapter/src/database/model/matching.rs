use kernel::model::{
    id::UserId,
    matching::{MatchPartner, UpcomingSession},
};
use sqlx::types::chrono::{DateTime, Utc};

/// The other side of a match assignment, with the name the partner prefers
/// to go by (their account name when no profile exists yet).
#[derive(sqlx::FromRow)]
pub struct MatchPartnerRow {
    pub partner_id: UserId,
    pub preferred_name: String,
}

impl From<MatchPartnerRow> for MatchPartner {
    fn from(value: MatchPartnerRow) -> Self {
        let MatchPartnerRow {
            partner_id,
            preferred_name,
        } = value;
        MatchPartner {
            partner_id,
            preferred_name,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct UpcomingSessionRow {
    pub preferred_name: String,
    pub scheduled_at: DateTime<Utc>,
}

impl From<UpcomingSessionRow> for UpcomingSession {
    fn from(value: UpcomingSessionRow) -> Self {
        let UpcomingSessionRow {
            preferred_name,
            scheduled_at,
        } = value;
        UpcomingSession {
            preferred_name,
            scheduled_at,
        }
    }
}
