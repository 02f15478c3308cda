pub mod auth;
pub mod health;
pub mod review;
pub mod user;
