use crate::model::questionnaire::event::{RegisterInterests, RegisterPersonality};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait QuestionnaireRepository: Send + Sync {
    /// Store a user's interest answers, replacing any earlier submission.
    async fn upsert_interests(&self, event: RegisterInterests) -> AppResult<()>;
    /// Store a user's trait scores, replacing any earlier submission.
    async fn upsert_personality(&self, event: RegisterPersonality) -> AppResult<()>;
}
