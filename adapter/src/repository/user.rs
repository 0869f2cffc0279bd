use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        id::UserId,
        user::{event::CreateUser, User},
    },
    repository::user::UserRepository,
};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let user_id = UserId::new();
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::BcryptError(e.to_string()))?;

        let res = sqlx::query(
            "INSERT INTO users (user_id, user_name, email, password_hash, role)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(user_id)
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(&password_hash)
        .bind(event.role)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no user record has been created".into(),
            ));
        }

        Ok(User {
            user_id,
            user_name: event.user_name,
            email: event.email,
            role: event.role,
        })
    }

    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, UserRow>(
            "SELECT user_id, user_name, email, role FROM users WHERE user_id = $1",
        )
        .bind(current_user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(User::from))
        .map_err(AppError::SpecificOperationError)
    }
}
