use crate::model::home::SeniorHome;
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait SeniorHomeRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<SeniorHome>>;
}
