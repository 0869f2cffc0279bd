pub mod auth;
pub mod home;
pub mod idea;
pub mod matching;
pub mod profile;
pub mod questionnaire;
pub mod reservation;
pub mod user;
