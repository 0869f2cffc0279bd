use super::{InterestFlags, PersonalityScores};
use crate::model::id::UserId;
use derive_new::new;

#[derive(new)]
pub struct RegisterInterests {
    pub user_id: UserId,
    pub interests: InterestFlags,
}

#[derive(new)]
pub struct RegisterPersonality {
    pub user_id: UserId,
    pub scores: PersonalityScores,
}
