use crate::model::{id::UserId, matching::MatchOverview};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::error::AppResult;

#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// The user's assigned partner and booked sessions after `now`,
    /// soonest first. No assignment and no sessions is a valid answer.
    async fn find_overview(&self, user_id: UserId, now: DateTime<Utc>)
        -> AppResult<MatchOverview>;
}
