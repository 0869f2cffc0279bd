use crate::model::id::UserId;
use async_trait::async_trait;
use shared::error::AppResult;

/// External text-generation service producing conversation-idea prompts as a
/// single numbered-list text block. The transport lives in the adapter; the
/// kernel only sees the raw text.
#[async_trait]
pub trait IdeaGateway: Send + Sync {
    async fn generate(&self, user_id: UserId) -> AppResult<String>;
}
