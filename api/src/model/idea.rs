use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaListResponse {
    pub items: Vec<String>,
}
