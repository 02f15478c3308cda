// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::response::ApiResponse;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    // === Validation (400) ===
    #[error("{0}")]
    Validation(String),

    // === Authentication (401) ===
    #[error("Invalid Email Or Password!")]
    InvalidCredentials,
    #[error("Token Missing!")]
    TokenMissing,
    #[error("Token Expired!")]
    TokenExpired,
    #[error("Invalid Token!")]
    TokenInvalid,
    #[error("{0}")]
    Unauthorized(String),

    // === Not found (404) ===
    #[error("{0}")]
    NotFound(String),

    // === Conflict (409) ===
    #[error("Email Already Registered")]
    EmailTaken,

    // === Internal (500) ===
    #[error("{0}")]
    Database(String),
    #[error("Password hashing failed: {0}")]
    Hashing(String),
    #[error("Token generation failed: {0}")]
    TokenGeneration(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials
            | AppError::TokenMissing
            | AppError::TokenExpired
            | AppError::TokenInvalid
            | AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::EmailTaken => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Hashing(_) | AppError::TokenGeneration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    // === Constructeurs helpers ===
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(%status, error = %self, "request failed");
        }

        ApiResponse::error(status.as_u16(), self.to_string()).into_response()
    }
}

// === Conversions automatiques depuis les erreurs des couches basses ===

impl From<crate::db::error::RepositoryError> for AppError {
    fn from(err: crate::db::error::RepositoryError) -> Self {
        match err {
            crate::db::error::RepositoryError::UniqueViolation(_) => AppError::EmailTaken,
            other => AppError::Database(other.to_string()),
        }
    }
}

impl From<crate::auth::jwt::JwtError> for AppError {
    fn from(err: crate::auth::jwt::JwtError) -> Self {
        match err {
            crate::auth::jwt::JwtError::GenerationFailed(e) => {
                AppError::TokenGeneration(e.to_string())
            }
            crate::auth::jwt::JwtError::Expired => AppError::TokenExpired,
            crate::auth::jwt::JwtError::Invalid(_) => AppError::TokenInvalid,
        }
    }
}

impl From<crate::auth::password::PasswordError> for AppError {
    fn from(err: crate::auth::password::PasswordError) -> Self {
        AppError::Hashing(err.to_string())
    }
}
