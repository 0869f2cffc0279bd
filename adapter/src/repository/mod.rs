pub mod auth;
pub mod health;
pub mod home;
pub mod matching;
pub mod profile;
pub mod questionnaire;
pub mod reservation;
pub mod user;
