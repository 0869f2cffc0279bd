use crate::model::id::UserId;
use chrono::{DateTime, Utc};

/// What the signed-in user sees on their schedule page: the permanently
/// assigned partner, if the matching run has produced one, plus any upcoming
/// booked sessions. A volunteer's partner is a senior and vice versa.
#[derive(Debug)]
pub struct MatchOverview {
    pub permanent: Option<MatchPartner>,
    pub sessions: Vec<UpcomingSession>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MatchPartner {
    pub partner_id: UserId,
    pub preferred_name: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UpcomingSession {
    pub preferred_name: String,
    pub scheduled_at: DateTime<Utc>,
}
