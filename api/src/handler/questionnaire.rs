use crate::{
    extractor::AuthorizedUser,
    model::questionnaire::{UpdateInterestsRequest, UpdatePersonalityRequest},
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn update_my_interests(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateInterestsRequest>,
) -> AppResult<StatusCode> {
    registry
        .questionnaire_repository()
        .upsert_interests(req.into_event(user.id()))
        .await?;

    Ok(StatusCode::OK)
}

pub async fn update_my_personality(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdatePersonalityRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .questionnaire_repository()
        .upsert_personality(req.into_event(user.id()))
        .await?;

    Ok(StatusCode::OK)
}
