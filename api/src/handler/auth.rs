use crate::{
    extractor::AuthorizedUser,
    model::auth::{AccessTokenResponse, LoginRequest},
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::auth::event::CreateToken;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AccessTokenResponse>> {
    req.validate(&())?;

    let auth_repository = registry.auth_repository();
    let access_token = auth_repository
        .create_token(CreateToken::new(req.email, req.password))
        .await?;
    let user_id = auth_repository
        .fetch_user_id_from_token(&access_token)
        .await?
        .ok_or(AppError::UnauthenticatedError)?;

    Ok(Json(AccessTokenResponse {
        user_id,
        access_token: access_token.0,
    }))
}

pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .auth_repository()
        .delete_token(&user.access_token)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
