use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("Token generation failed: {0}")]
    GenerationFailed(jsonwebtoken::errors::Error),
    #[error("Token expired")]
    Expired,
    #[error("Token verification failed: {0}")]
    Invalid(jsonwebtoken::errors::Error),
}

/// Identity claims embedded in both access and refresh tokens.
/// `jti` is set on refresh tokens only, so two sessions opened in the
/// same second still get distinct token strings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<Uuid>,
}

/// Issues and verifies the two token families. Access and refresh tokens
/// are signed with distinct secrets, so one can never stand in for the
/// other. Secrets and TTLs are injected once at construction; nothing
/// here reads the environment.
#[derive(Clone)]
pub struct JwtManager {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
}

impl JwtManager {
    pub fn new(
        access_secret: &str,
        refresh_secret: &str,
        access_ttl_secs: i64,
        refresh_ttl_secs: i64,
    ) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(access_secret.as_ref()),
            access_decoding: DecodingKey::from_secret(access_secret.as_ref()),
            refresh_encoding: EncodingKey::from_secret(refresh_secret.as_ref()),
            refresh_decoding: DecodingKey::from_secret(refresh_secret.as_ref()),
            access_ttl_secs,
            refresh_ttl_secs,
        }
    }

    pub fn issue_access_token(
        &self,
        user_id: i32,
        name: &str,
        email: &str,
    ) -> Result<String, JwtError> {
        let claims = Self::build_claims(user_id, name, email, self.access_ttl_secs, None);
        encode(&Header::default(), &claims, &self.access_encoding)
            .map_err(JwtError::GenerationFailed)
    }

    pub fn issue_refresh_token(
        &self,
        user_id: i32,
        name: &str,
        email: &str,
    ) -> Result<String, JwtError> {
        let claims = Self::build_claims(
            user_id,
            name,
            email,
            self.refresh_ttl_secs,
            Some(Uuid::new_v4()),
        );
        encode(&Header::default(), &claims, &self.refresh_encoding)
            .map_err(JwtError::GenerationFailed)
    }

    pub fn verify_access_token(&self, token: &str) -> Result<Claims, JwtError> {
        Self::verify(token, &self.access_decoding)
    }

    pub fn verify_refresh_token(&self, token: &str) -> Result<Claims, JwtError> {
        Self::verify(token, &self.refresh_decoding)
    }

    fn build_claims(
        user_id: i32,
        name: &str,
        email: &str,
        ttl_secs: i64,
        jti: Option<Uuid>,
    ) -> Claims {
        let now = Utc::now();
        Claims {
            user_id,
            name: name.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
            jti,
        }
    }

    fn verify(token: &str, key: &DecodingKey) -> Result<Claims, JwtError> {
        // No leeway: a token is rejected strictly after its expiry instant.
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Invalid(e),
            })
    }
}
