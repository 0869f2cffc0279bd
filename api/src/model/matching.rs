use chrono::{DateTime, Utc};
use kernel::model::{
    id::UserId,
    matching::{MatchOverview, MatchPartner, UpcomingSession},
};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchOverviewResponse {
    /// `null` while no matching run has assigned a partner yet.
    pub permanent: Option<MatchPartnerResponse>,
    pub sessions: Vec<UpcomingSessionResponse>,
}

impl From<MatchOverview> for MatchOverviewResponse {
    fn from(value: MatchOverview) -> Self {
        let MatchOverview {
            permanent,
            sessions,
        } = value;
        Self {
            permanent: permanent.map(MatchPartnerResponse::from),
            sessions: sessions
                .into_iter()
                .map(UpcomingSessionResponse::from)
                .collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPartnerResponse {
    pub partner_id: UserId,
    pub preferred_name: String,
}

impl From<MatchPartner> for MatchPartnerResponse {
    fn from(value: MatchPartner) -> Self {
        let MatchPartner {
            partner_id,
            preferred_name,
        } = value;
        Self {
            partner_id,
            preferred_name,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingSessionResponse {
    pub preferred_name: String,
    pub scheduled_at: DateTime<Utc>,
}

impl From<UpcomingSession> for UpcomingSessionResponse {
    fn from(value: UpcomingSession) -> Self {
        let UpcomingSession {
            preferred_name,
            scheduled_at,
        } = value;
        Self {
            preferred_name,
            scheduled_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn unmatched_user_gets_null_partner_and_no_sessions() {
        let res = MatchOverviewResponse::from(MatchOverview {
            permanent: None,
            sessions: vec![],
        });
        let json = serde_json::to_value(&res).unwrap();
        assert!(json["permanent"].is_null());
        assert_eq!(json["sessions"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn matched_user_sees_partner_and_session_names() {
        let res = MatchOverviewResponse::from(MatchOverview {
            permanent: Some(MatchPartner {
                partner_id: UserId::new(),
                preferred_name: "Margaret".into(),
            }),
            sessions: vec![UpcomingSession {
                preferred_name: "Margaret".into(),
                scheduled_at: Utc.with_ymd_and_hms(2025, 4, 1, 15, 0, 0).unwrap(),
            }],
        });
        assert_eq!(
            res.permanent.as_ref().unwrap().preferred_name,
            "Margaret"
        );
        assert_eq!(res.sessions[0].preferred_name, "Margaret");
    }
}
