use crate::{
    extractor::AuthorizedUser,
    model::profile::{
        EmailPreferencesResponse, ProfileResponse, UpdateEmailPreferencesRequest,
        UpdateProfileRequest,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::profile::ProfileView;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn get_my_profile(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ProfileResponse>> {
    let (public, private) = registry
        .profile_repository()
        .find_partitions(user.id())
        .await?;

    Ok(Json(ProfileView::merge(public, private).into()))
}

pub async fn update_my_profile(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateProfileRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .profile_repository()
        .upsert(req.into_event(user.id()))
        .await?;

    Ok(StatusCode::OK)
}

pub async fn get_my_email_preferences(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EmailPreferencesResponse>> {
    registry
        .profile_repository()
        .find_email_preferences(user.id())
        .await
        .map(|email_preferences| {
            Json(EmailPreferencesResponse { email_preferences })
        })
}

pub async fn update_my_email_preferences(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateEmailPreferencesRequest>,
) -> AppResult<StatusCode> {
    req.validate(&())?;

    registry
        .profile_repository()
        .update_email_preferences(user.id(), req.email_preferences)
        .await?;

    Ok(StatusCode::OK)
}
