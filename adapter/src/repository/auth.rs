use crate::{
    database::{model::user::UserCredentialRow, ConnectionPool},
    redis::{
        model::{AuthorizationKey, AuthorizedUserId},
        RedisClient,
    },
};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        auth::{event::CreateToken, AccessToken},
        id::UserId,
    },
    repository::auth::AuthRepository,
};
use shared::error::{AppError, AppResult};
use std::sync::Arc;
use uuid::Uuid;

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let key = AuthorizationKey(AccessToken(access_token.0.clone()));
        let value = self.kv.get(&key).await?;
        Ok(value.map(|authorized| authorized.0))
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        let credential = sqlx::query_as::<_, UserCredentialRow>(
            "SELECT user_id, password_hash FROM users WHERE email = $1",
        )
        .bind(&event.email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or(AppError::UnauthenticatedError)?;

        let valid = bcrypt::verify(&event.password, &credential.password_hash)
            .map_err(|e| AppError::BcryptError(e.to_string()))?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }

        let access_token = AccessToken(format!(
            "{}{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        ));
        let key = AuthorizationKey(AccessToken(access_token.0.clone()));
        self.kv
            .set_ex(&key, &AuthorizedUserId(credential.user_id), self.ttl)
            .await?;

        Ok(access_token)
    }

    async fn delete_token(&self, access_token: &AccessToken) -> AppResult<()> {
        let key = AuthorizationKey(AccessToken(access_token.0.clone()));
        self.kv.delete(&key).await
    }
}
