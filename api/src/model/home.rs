use kernel::model::{home::SeniorHome, id::HomeId};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeniorHomesResponse {
    pub items: Vec<SeniorHomeResponse>,
}

impl From<Vec<SeniorHome>> for SeniorHomesResponse {
    fn from(value: Vec<SeniorHome>) -> Self {
        Self {
            items: value.into_iter().map(SeniorHomeResponse::from).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeniorHomeResponse {
    pub home_id: HomeId,
    pub home_name: String,
}

impl From<SeniorHome> for SeniorHomeResponse {
    fn from(value: SeniorHome) -> Self {
        let SeniorHome { home_id, home_name } = value;
        Self { home_id, home_name }
    }
}
