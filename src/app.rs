// src/app.rs

use axum::{
    Extension, Router,
    routing::{delete, get, patch, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::auth::jwt::JwtManager;
use crate::auth::services::AuthService;
use crate::handlers::auth::{login, logout, refresh_token, signup};
use crate::handlers::health::health_check;
use crate::handlers::review::{
    add_review, delete_review, get_all_reviews, get_user_reviews, update_review,
};
use crate::handlers::user::{delete_account, search_all_users, update_account, who_am_i, who_is};

/// Routes publiques (state: AuthService)
fn public_routes(auth_service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/health-check", get(health_check))
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/refresh-token", post(refresh_token))
        .route("/logout", post(logout))
        .with_state(auth_service)
}

/// Routes protégées par bearer token (state: JwtManager pour AuthClaims)
fn protected_routes(jwt_manager: JwtManager, auth_service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/who-am-i", get(who_am_i))
        .route("/delete-account", delete(delete_account))
        .route("/update-account", patch(update_account))
        .route("/who-is/{user_id}", get(who_is))
        .route("/search-all-users", get(search_all_users))
        .route("/add-review", post(add_review))
        .route("/get-user-reviews", get(get_user_reviews))
        .route("/update-review", patch(update_review))
        .route("/delete-review", delete(delete_review))
        .route("/get-all-reviews", get(get_all_reviews))
        .layer(Extension(auth_service))
        .with_state(jwt_manager)
}

/// Construit l'application complète
pub fn build_router(jwt_manager: JwtManager, refresh_expiry_days: i64) -> Router {
    let auth_service = Arc::new(AuthService::new(jwt_manager.clone(), refresh_expiry_days));

    public_routes(auth_service.clone())
        .merge(protected_routes(jwt_manager, auth_service))
        .layer(TraceLayer::new_for_http())
}
