pub mod home;
pub mod matching;
pub mod profile;
pub mod reservation;
pub mod user;
