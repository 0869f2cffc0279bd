use crate::{
    extractor::AuthorizedUser,
    model::user::{CreateUserRequest, UserResponse},
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    req.validate(&())?;

    let registered_user = registry.user_repository().create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(registered_user.into())))
}

pub async fn get_current_user(user: AuthorizedUser) -> Json<UserResponse> {
    Json(user.user.into())
}
