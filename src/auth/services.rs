// src/auth/services.rs

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::auth::password::PasswordManager;
use crate::db::models::refresh_token::NewRefreshToken;
use crate::db::models::user::{NewUser, UserSummary};
use crate::db::store::{AuthStore, DieselStore};
use crate::dto::requests::{LoginRequest, LogoutRequest, RefreshTokenRequest, SignupRequest};
use crate::dto::responses::{AccessToken, TokenPair};
use crate::error::AppError;

/// Orchestrates the session lifecycle: credential verification, token
/// issuance, refresh-token persistence and revocation, plus the account
/// operations that need the password hash.
pub struct AuthService {
    jwt_manager: super::jwt::JwtManager,
    refresh_expiry_days: i64,
    store: Arc<dyn AuthStore>,
}

impl AuthService {
    pub fn new(jwt_manager: super::jwt::JwtManager, refresh_expiry_days: i64) -> Self {
        Self::with_store(jwt_manager, refresh_expiry_days, Arc::new(DieselStore))
    }

    pub fn with_store(
        jwt_manager: super::jwt::JwtManager,
        refresh_expiry_days: i64,
        store: Arc<dyn AuthStore>,
    ) -> Self {
        Self {
            jwt_manager,
            refresh_expiry_days,
            store,
        }
    }

    /// Connexion: vérifie les credentials, émet les deux tokens et
    /// persiste le refresh token avec son expiration côté serveur.
    pub fn login(&self, request: &LoginRequest) -> Result<TokenPair, AppError> {
        let (Some(email), Some(password)) = (
            non_empty(request.email.as_deref()),
            non_empty(request.password.as_deref()),
        ) else {
            return Err(AppError::validation("Email or password is missing!"));
        };

        // Même réponse pour email inconnu et mauvais mot de passe
        // (pas d'énumération d'utilisateurs possible).
        let user = self
            .store
            .find_user_by_email(email)?
            .ok_or(AppError::InvalidCredentials)?;

        if !PasswordManager::verify(password, &user.password)? {
            return Err(AppError::InvalidCredentials);
        }

        let access_token =
            self.jwt_manager
                .issue_access_token(user.user_id, &user.name, &user.email)?;
        let refresh_token =
            self.jwt_manager
                .issue_refresh_token(user.user_id, &user.name, &user.email)?;

        let new_refresh_token = NewRefreshToken {
            token: refresh_token.clone(),
            user_id: user.user_id,
            expires_at: Utc::now() + Duration::days(self.refresh_expiry_days),
        };
        self.store.create_refresh_token(&new_refresh_token)?;

        Ok(TokenPair {
            token: access_token,
            refresh_token,
        })
    }

    /// Inscription. Pas d'auto-login: le client enchaîne sur /login.
    pub fn signup(&self, request: &SignupRequest) -> Result<(), AppError> {
        let (Some(full_name), Some(email), Some(password)) = (
            non_empty(request.full_name.as_deref()),
            non_empty(request.email.as_deref()),
            non_empty(request.password.as_deref()),
        ) else {
            return Err(AppError::validation("Missing Required Fields"));
        };

        if self.store.find_user_by_email(email)?.is_some() {
            return Err(AppError::EmailTaken);
        }

        let password_hash = PasswordManager::hash(password)?;

        let new_user = NewUser {
            name: full_name.to_string(),
            email: email.to_string(),
            password: password_hash,
        };
        self.store.create_user(&new_user)?;

        Ok(())
    }

    /// Échange un refresh token contre un nouvel access token.
    ///
    /// La signature seule ne suffit pas: le token doit encore exister dans
    /// le store (un token supprimé au logout est refusé), et l'utilisateur
    /// doit toujours exister pour reconstruire les claims complets.
    pub fn refresh(&self, request: &RefreshTokenRequest) -> Result<AccessToken, AppError> {
        let Some(refresh_token) = non_empty(request.refresh_token.as_deref()) else {
            return Err(AppError::unauthorized("Refresh token missing!"));
        };

        let claims = self.jwt_manager.verify_refresh_token(refresh_token)?;

        let stored = self
            .store
            .find_refresh_token(refresh_token)?
            .ok_or(AppError::TokenInvalid)?;
        if stored.user_id != claims.user_id {
            return Err(AppError::TokenInvalid);
        }

        let user = self
            .store
            .find_user_by_id(stored.user_id)?
            .ok_or(AppError::TokenInvalid)?;

        let token = self
            .jwt_manager
            .issue_access_token(user.user_id, &user.name, &user.email)?;

        Ok(AccessToken { token })
    }

    /// Déconnexion: supprime le refresh token persisté. Idempotent.
    pub fn logout(&self, request: &LogoutRequest) -> Result<(), AppError> {
        let Some(refresh_token) = non_empty(request.refresh_token.as_deref()) else {
            return Err(AppError::validation("Refresh token is required."));
        };

        self.store.delete_refresh_token(refresh_token)?;

        Ok(())
    }

    /// Suppression de compte, re-confirmée par mot de passe.
    pub fn delete_account(&self, user_id: i32, password: &str) -> Result<(), AppError> {
        let user = self
            .store
            .find_user_by_id(user_id)?
            .ok_or(AppError::not_found("User not found!"))?;

        if !PasswordManager::verify(password, &user.password)? {
            return Err(AppError::unauthorized("Incorrect Password!"));
        }

        self.store.delete_user(user_id)?;
        Ok(())
    }

    pub fn update_account(&self, user_id: i32, name: &str) -> Result<(), AppError> {
        self.store.update_user_name(user_id, name)?;
        Ok(())
    }

    pub fn get_user_summary(&self, user_id: i32) -> Result<UserSummary, AppError> {
        self.store
            .find_user_summary(user_id)?
            .ok_or(AppError::not_found("No User Found!"))
    }

    pub fn search_users(&self, query: &str) -> Result<Vec<UserSummary>, AppError> {
        self.store
            .search_users_by_name(query)
            .map_err(AppError::from)
    }
}

/// An absent or empty string both count as missing.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::jwt::JwtManager;
    use crate::db::error::RepositoryError;
    use crate::db::models::refresh_token::RefreshToken;
    use crate::db::models::user::User;
    use std::sync::Mutex;

    /// In-memory stand-in for the diesel store.
    #[derive(Default)]
    struct InMemoryStore {
        users: Mutex<Vec<User>>,
        tokens: Mutex<Vec<RefreshToken>>,
    }

    impl AuthStore for InMemoryStore {
        fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        fn find_user_by_id(&self, user_id: i32) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.user_id == user_id)
                .cloned())
        }

        fn find_user_summary(
            &self,
            user_id: i32,
        ) -> Result<Option<UserSummary>, RepositoryError> {
            Ok(self.find_user_by_id(user_id)?.map(|u| UserSummary {
                user_id: u.user_id,
                name: u.name,
                email: u.email,
            }))
        }

        fn search_users_by_name(&self, query: &str) -> Result<Vec<UserSummary>, RepositoryError> {
            let needle = query.to_lowercase();
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .filter(|u| u.name.to_lowercase().contains(&needle))
                .map(|u| UserSummary {
                    user_id: u.user_id,
                    name: u.name.clone(),
                    email: u.email.clone(),
                })
                .collect())
        }

        fn create_user(&self, new_user: &NewUser) -> Result<User, RepositoryError> {
            let mut users = self.users.lock().unwrap();
            let user = User {
                user_id: users.iter().map(|u| u.user_id).max().unwrap_or(0) + 1,
                name: new_user.name.clone(),
                email: new_user.email.clone(),
                password: new_user.password.clone(),
            };
            users.push(user.clone());
            Ok(user)
        }

        fn update_user_name(&self, user_id: i32, name: &str) -> Result<(), RepositoryError> {
            for user in self.users.lock().unwrap().iter_mut() {
                if user.user_id == user_id {
                    user.name = name.to_string();
                }
            }
            Ok(())
        }

        fn delete_user(&self, user_id: i32) -> Result<(), RepositoryError> {
            self.users.lock().unwrap().retain(|u| u.user_id != user_id);
            Ok(())
        }

        fn create_refresh_token(
            &self,
            new_refresh_token: &NewRefreshToken,
        ) -> Result<RefreshToken, RepositoryError> {
            let token = RefreshToken {
                token: new_refresh_token.token.clone(),
                user_id: new_refresh_token.user_id,
                expires_at: new_refresh_token.expires_at,
            };
            self.tokens.lock().unwrap().push(token.clone());
            Ok(token)
        }

        fn find_refresh_token(
            &self,
            token: &str,
        ) -> Result<Option<RefreshToken>, RepositoryError> {
            Ok(self
                .tokens
                .lock()
                .unwrap()
                .iter()
                .find(|t| t.token == token)
                .cloned())
        }

        fn delete_refresh_token(&self, token: &str) -> Result<(), RepositoryError> {
            self.tokens.lock().unwrap().retain(|t| t.token != token);
            Ok(())
        }
    }

    fn make_service() -> AuthService {
        AuthService::with_store(
            JwtManager::new("access_secret", "refresh_secret", 900, 604_800),
            7,
            Arc::new(InMemoryStore::default()),
        )
    }

    fn signup_request(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            full_name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[test]
    fn login_rejects_missing_email() {
        let service = make_service();
        let request = LoginRequest {
            email: None,
            password: Some("Password123".to_string()),
        };

        let err = service.login(&request).unwrap_err();
        assert_eq!(err.to_string(), "Email or password is missing!");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn login_rejects_empty_password() {
        let service = make_service();
        let request = LoginRequest {
            email: Some("user@example.com".to_string()),
            password: Some(String::new()),
        };

        let err = service.login(&request).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn signup_then_login_returns_two_distinct_tokens() {
        let service = make_service();
        service
            .signup(&signup_request("Ada Lovelace", "ada@example.com", "Password123"))
            .expect("signup should succeed");

        let tokens = service
            .login(&login_request("ada@example.com", "Password123"))
            .expect("login should succeed");

        assert!(!tokens.token.is_empty());
        assert!(!tokens.refresh_token.is_empty());
        assert_ne!(tokens.token, tokens.refresh_token);
    }

    #[test]
    fn signup_rejects_missing_fields() {
        let service = make_service();
        let request = SignupRequest {
            full_name: Some("Ada Lovelace".to_string()),
            email: None,
            password: Some("Password123".to_string()),
        };

        let err = service.signup(&request).unwrap_err();
        assert_eq!(err.to_string(), "Missing Required Fields");
    }

    #[test]
    fn signup_rejects_duplicate_email() {
        let service = make_service();
        service
            .signup(&signup_request("Ada", "ada@example.com", "Password123"))
            .expect("first signup should succeed");

        let err = service
            .signup(&signup_request("Someone Else", "ada@example.com", "Other456"))
            .unwrap_err();

        assert!(matches!(err, AppError::EmailTaken));
        assert_eq!(err.to_string(), "Email Already Registered");
    }

    #[test]
    fn login_failures_share_one_message_for_both_causes() {
        let service = make_service();
        service
            .signup(&signup_request("Ada", "ada@example.com", "Password123"))
            .expect("signup should succeed");

        let wrong_password = service
            .login(&login_request("ada@example.com", "WrongPass456"))
            .unwrap_err();
        let unknown_email = service
            .login(&login_request("nobody@example.com", "Password123"))
            .unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert_eq!(wrong_password.to_string(), "Invalid Email Or Password!");
    }

    #[test]
    fn refresh_rejects_missing_token_as_unauthorized() {
        let service = make_service();
        let request = RefreshTokenRequest {
            refresh_token: None,
        };

        let err = service.refresh(&request).unwrap_err();
        assert_eq!(err.to_string(), "Refresh token missing!");
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn refresh_rejects_garbage_token_as_invalid() {
        let service = make_service();
        let request = RefreshTokenRequest {
            refresh_token: Some("not.a.jwt".to_string()),
        };

        let err = service.refresh(&request).unwrap_err();
        assert!(matches!(err, AppError::TokenInvalid));
    }

    #[test]
    fn refresh_rejects_expired_token_as_expired() {
        let expired_issuer = JwtManager::new("access_secret", "refresh_secret", -10, -10);
        let token = expired_issuer
            .issue_refresh_token(1, "Ada", "ada@example.com")
            .unwrap();

        let service = make_service();
        let request = RefreshTokenRequest {
            refresh_token: Some(token),
        };

        let err = service.refresh(&request).unwrap_err();
        assert!(matches!(err, AppError::TokenExpired));
    }

    #[test]
    fn refresh_rejects_access_token_signed_with_wrong_secret() {
        // An access token must not be usable on the refresh path.
        let service = make_service();
        let access = JwtManager::new("access_secret", "refresh_secret", 900, 900)
            .issue_access_token(1, "Ada", "ada@example.com")
            .unwrap();

        let request = RefreshTokenRequest {
            refresh_token: Some(access),
        };

        let err = service.refresh(&request).unwrap_err();
        assert!(matches!(err, AppError::TokenInvalid));
    }

    #[test]
    fn refresh_succeeds_while_token_is_persisted() {
        let service = make_service();
        service
            .signup(&signup_request("Ada", "ada@example.com", "Password123"))
            .expect("signup should succeed");
        let tokens = service
            .login(&login_request("ada@example.com", "Password123"))
            .expect("login should succeed");

        let refreshed = service
            .refresh(&RefreshTokenRequest {
                refresh_token: Some(tokens.refresh_token),
            })
            .expect("refresh should succeed before logout");

        assert!(!refreshed.token.is_empty());
    }

    #[test]
    fn refresh_rejects_token_after_logout() {
        // A validly signed, unexpired refresh token must be refused once
        // its row has been deleted: the store is the source of truth.
        let service = make_service();
        service
            .signup(&signup_request("Ada", "ada@example.com", "Password123"))
            .expect("signup should succeed");
        let tokens = service
            .login(&login_request("ada@example.com", "Password123"))
            .expect("login should succeed");

        service
            .logout(&LogoutRequest {
                refresh_token: Some(tokens.refresh_token.clone()),
            })
            .expect("logout should succeed");

        let err = service
            .refresh(&RefreshTokenRequest {
                refresh_token: Some(tokens.refresh_token),
            })
            .unwrap_err();

        assert!(matches!(err, AppError::TokenInvalid));
        assert_eq!(err.to_string(), "Invalid Token!");
    }

    #[test]
    fn refresh_rejects_token_of_deleted_user() {
        let service = make_service();
        service
            .signup(&signup_request("Ada", "ada@example.com", "Password123"))
            .expect("signup should succeed");
        let tokens = service
            .login(&login_request("ada@example.com", "Password123"))
            .expect("login should succeed");

        service
            .delete_account(1, "Password123")
            .expect("delete should succeed");

        let err = service
            .refresh(&RefreshTokenRequest {
                refresh_token: Some(tokens.refresh_token),
            })
            .unwrap_err();

        assert!(matches!(err, AppError::TokenInvalid));
    }

    #[test]
    fn logout_rejects_missing_token_as_validation_error() {
        let service = make_service();
        let request = LogoutRequest {
            refresh_token: None,
        };

        let err = service.logout(&request).unwrap_err();
        assert_eq!(err.to_string(), "Refresh token is required.");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn logout_is_idempotent_for_unknown_token() {
        let service = make_service();
        let request = LogoutRequest {
            refresh_token: Some("never-issued".to_string()),
        };

        assert!(service.logout(&request).is_ok());
    }

    #[test]
    fn search_users_matches_case_insensitively() {
        let service = make_service();
        service
            .signup(&signup_request("Ada Lovelace", "ada@example.com", "Password123"))
            .expect("signup should succeed");

        let results = service.search_users("lovelace").expect("search should succeed");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Ada Lovelace");
    }
}
