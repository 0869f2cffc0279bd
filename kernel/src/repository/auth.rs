use crate::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Resolve a bearer token to the user it was issued to, if still valid.
    async fn fetch_user_id_from_token(&self, access_token: &AccessToken)
        -> AppResult<Option<UserId>>;
    /// Check credentials and issue a fresh token with the configured TTL.
    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken>;
    async fn delete_token(&self, access_token: &AccessToken) -> AppResult<()>;
}
