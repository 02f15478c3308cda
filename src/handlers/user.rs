use axum::Extension;
use axum::extract::{Path, Query};
use std::sync::Arc;

use crate::auth::extractors::AuthClaims;
use crate::auth::services::AuthService;
use crate::db::models::user::UserSummary;
use crate::dto::requests::{DeleteAccountRequest, SearchUsersParams, UpdateAccountRequest};
use crate::dto::responses::Identity;
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::response::ApiResponse;

/// GET /who-am-i
/// Identité portée par le token vérifié; aucun aller-retour base.
pub async fn who_am_i(claims: AuthClaims) -> ApiResponse<Identity> {
    ApiResponse::ok("Here's what we know about you!", Identity::from(claims))
}

/// DELETE /delete-account
pub async fn delete_account(
    claims: AuthClaims,
    Extension(auth_service): Extension<Arc<AuthService>>,
    ApiJson(payload): ApiJson<DeleteAccountRequest>,
) -> Result<ApiResponse<()>, AppError> {
    let password = payload
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::validation("Password Missing!"))?;

    auth_service.delete_account(claims.user_id, &password)?;
    Ok(ApiResponse::message("Poof! You're gone"))
}

/// PATCH /update-account
pub async fn update_account(
    claims: AuthClaims,
    Extension(auth_service): Extension<Arc<AuthService>>,
    ApiJson(payload): ApiJson<UpdateAccountRequest>,
) -> Result<ApiResponse<()>, AppError> {
    let name = payload
        .name
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::validation("Name Is Required!"))?;

    auth_service.update_account(claims.user_id, &name)?;
    Ok(ApiResponse::message("All Set!"))
}

/// GET /who-is/{user_id}
pub async fn who_is(
    _claims: AuthClaims,
    Extension(auth_service): Extension<Arc<AuthService>>,
    Path(user_id): Path<i32>,
) -> Result<ApiResponse<UserSummary>, AppError> {
    let user = auth_service.get_user_summary(user_id)?;
    Ok(ApiResponse::ok("User Details Fetched Successfully!", user))
}

/// GET /search-all-users?search_query=
pub async fn search_all_users(
    _claims: AuthClaims,
    Extension(auth_service): Extension<Arc<AuthService>>,
    Query(params): Query<SearchUsersParams>,
) -> Result<ApiResponse<Vec<UserSummary>>, AppError> {
    let query = params.search_query.unwrap_or_default();
    if query.trim().is_empty() {
        return Ok(ApiResponse::ok(
            "No users found. Please provide a search query.",
            Vec::new(),
        ));
    }

    let users = auth_service.search_users(&query)?;
    Ok(ApiResponse::ok("Users fetched successfully.", users))
}
