use crate::model::{
    id::UserId,
    profile::{event::UpdateProfile, PrivateProfile, PublicProfile},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch both partitions for a user. Either may be absent; merging into
    /// a view is the caller's concern.
    async fn find_partitions(
        &self,
        user_id: UserId,
    ) -> AppResult<(Option<PublicProfile>, Option<PrivateProfile>)>;
    async fn upsert(&self, event: UpdateProfile) -> AppResult<()>;
    /// Senior homes the user wants open-slot notifications for. A user who
    /// never saved preferences has an empty list.
    async fn find_email_preferences(&self, user_id: UserId) -> AppResult<Vec<String>>;
    async fn update_email_preferences(
        &self,
        user_id: UserId,
        homes: Vec<String>,
    ) -> AppResult<()>;
}
