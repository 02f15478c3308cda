pub mod refresh_token;
pub mod review;
pub mod user;
