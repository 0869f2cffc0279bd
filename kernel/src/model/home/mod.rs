use crate::model::id::HomeId;

#[derive(Debug, PartialEq, Eq)]
pub struct SeniorHome {
    pub home_id: HomeId,
    pub home_name: String,
}
