use crate::{extractor::AuthorizedUser, model::matching::MatchOverviewResponse};
use axum::{extract::State, Json};
use chrono::Utc;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_my_match(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MatchOverviewResponse>> {
    registry
        .match_repository()
        .find_overview(user.id(), Utc::now())
        .await
        .map(MatchOverviewResponse::from)
        .map(Json)
}
