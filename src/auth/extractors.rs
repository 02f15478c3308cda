use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

use crate::auth::jwt::{Claims, JwtManager};
use crate::error::AppError;

/// Extracteur d'authentification pour les routes protégées.
/// Valide `Authorization: Bearer <JWT>`, vérifie le token via `JwtManager`,
/// et expose les claims d'identité aux handlers.
///
/// Stateless check only: neither the refresh-token table nor the users
/// table is consulted here.
#[derive(Debug, Clone)]
pub struct AuthClaims {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    #[allow(dead_code)]
    pub iat: i64,
    #[allow(dead_code)]
    pub exp: i64,
}

impl From<Claims> for AuthClaims {
    fn from(c: Claims) -> Self {
        Self {
            user_id: c.user_id,
            name: c.name,
            email: c.email,
            iat: c.iat,
            exp: c.exp,
        }
    }
}

/// Implémentation de l'extracteur pour un router ayant `JwtManager` comme state.
impl FromRequestParts<JwtManager> for AuthClaims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        jwt_manager: &JwtManager,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AppError::TokenMissing)?;

        let auth_str = auth_header.to_str().map_err(|_| AppError::TokenMissing)?;

        // Doit être de type Bearer
        const BEARER: &str = "Bearer ";
        if !auth_str.starts_with(BEARER) {
            return Err(AppError::TokenMissing);
        }

        let token = &auth_str[BEARER.len()..];

        let claims = jwt_manager
            .verify_access_token(token)
            .map_err(AppError::from)?;

        Ok(AuthClaims::from(claims))
    }
}
