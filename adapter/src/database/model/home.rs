use kernel::model::{home::SeniorHome, id::HomeId};

#[derive(sqlx::FromRow)]
pub struct SeniorHomeRow {
    pub home_id: HomeId,
    pub home_name: String,
}

impl From<SeniorHomeRow> for SeniorHome {
    fn from(value: SeniorHomeRow) -> Self {
        let SeniorHomeRow { home_id, home_name } = value;
        SeniorHome { home_id, home_name }
    }
}
