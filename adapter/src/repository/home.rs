use crate::database::{model::home::SeniorHomeRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::{model::home::SeniorHome, repository::home::SeniorHomeRepository};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct SeniorHomeRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SeniorHomeRepository for SeniorHomeRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<SeniorHome>> {
        sqlx::query_as::<_, SeniorHomeRow>(
            "SELECT home_id, home_name FROM senior_homes ORDER BY home_name ASC",
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(SeniorHome::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}
