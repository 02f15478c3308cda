pub mod refresh_token_repository;
pub mod review_repository;
pub mod user_repository;
