// src/handlers/auth.rs

use axum::extract::State;
use std::sync::Arc;

use crate::auth::services::AuthService;
use crate::dto::requests::{LoginRequest, LogoutRequest, RefreshTokenRequest, SignupRequest};
use crate::dto::responses::{AccessToken, TokenPair};
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::response::ApiResponse;

/// POST /login
pub async fn login(
    State(auth_service): State<Arc<AuthService>>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<ApiResponse<TokenPair>, AppError> {
    let tokens = auth_service.login(&payload)?;
    Ok(ApiResponse::ok("You're in!", tokens))
}

/// POST /signup
pub async fn signup(
    State(auth_service): State<Arc<AuthService>>,
    ApiJson(payload): ApiJson<SignupRequest>,
) -> Result<ApiResponse<()>, AppError> {
    auth_service.signup(&payload)?;
    Ok(ApiResponse::message("You're Officially In!"))
}

/// POST /refresh-token
pub async fn refresh_token(
    State(auth_service): State<Arc<AuthService>>,
    ApiJson(payload): ApiJson<RefreshTokenRequest>,
) -> Result<ApiResponse<AccessToken>, AppError> {
    let token = auth_service.refresh(&payload)?;
    Ok(ApiResponse::ok("Token refreshed!", token))
}

/// POST /logout
pub async fn logout(
    State(auth_service): State<Arc<AuthService>>,
    ApiJson(payload): ApiJson<LogoutRequest>,
) -> Result<ApiResponse<()>, AppError> {
    auth_service.logout(&payload)?;
    Ok(ApiResponse::message("Successfully logged out."))
}
