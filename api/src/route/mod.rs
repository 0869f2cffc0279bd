pub mod auth;
pub mod health;
pub mod home;
pub mod idea;
pub mod reservation;
pub mod user;
pub mod v1;
