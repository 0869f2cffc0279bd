use crate::model::home::SeniorHomesResponse;
use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::AppResult;

// The registration form needs the directory before sign-in completes,
// so this endpoint is unauthenticated.
pub async fn show_senior_homes(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SeniorHomesResponse>> {
    registry
        .senior_home_repository()
        .find_all()
        .await
        .map(SeniorHomesResponse::from)
        .map(Json)
}
