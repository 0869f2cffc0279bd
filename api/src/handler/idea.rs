use crate::{extractor::AuthorizedUser, model::idea::IdeaListResponse};
use axum::{extract::State, Json};
use kernel::model::idea::split_numbered_list;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn show_conversation_ideas(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<IdeaListResponse>> {
    let text = registry.idea_gateway().generate(user.id()).await?;
    let items = split_numbered_list(&text);

    Ok(Json(IdeaListResponse { items }))
}
