use crate::db::error::RepositoryError;
use crate::db::models::refresh_token::{NewRefreshToken, RefreshToken};
use crate::db::models::user::{NewUser, User, UserSummary};
use crate::db::repositories::refresh_token_repository::RefreshTokenRepository;
use crate::db::repositories::user_repository::UserRepository;

/// Persistence seam for the session controller: everything `AuthService`
/// reads or writes goes through here. The diesel-backed implementation
/// delegates to the repositories; tests inject an in-memory store.
pub trait AuthStore: Send + Sync {
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    fn find_user_by_id(&self, user_id: i32) -> Result<Option<User>, RepositoryError>;
    fn find_user_summary(&self, user_id: i32) -> Result<Option<UserSummary>, RepositoryError>;
    fn search_users_by_name(&self, query: &str) -> Result<Vec<UserSummary>, RepositoryError>;
    fn create_user(&self, new_user: &NewUser) -> Result<User, RepositoryError>;
    fn update_user_name(&self, user_id: i32, name: &str) -> Result<(), RepositoryError>;
    fn delete_user(&self, user_id: i32) -> Result<(), RepositoryError>;

    fn create_refresh_token(
        &self,
        new_refresh_token: &NewRefreshToken,
    ) -> Result<RefreshToken, RepositoryError>;
    fn find_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, RepositoryError>;
    fn delete_refresh_token(&self, token: &str) -> Result<(), RepositoryError>;
}

/// Production store, backed by the diesel repositories and the global pool.
pub struct DieselStore;

impl AuthStore for DieselStore {
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        UserRepository::find_by_email(email)
    }

    fn find_user_by_id(&self, user_id: i32) -> Result<Option<User>, RepositoryError> {
        UserRepository::find_by_id(user_id)
    }

    fn find_user_summary(&self, user_id: i32) -> Result<Option<UserSummary>, RepositoryError> {
        UserRepository::find_summary_by_id(user_id)
    }

    fn search_users_by_name(&self, query: &str) -> Result<Vec<UserSummary>, RepositoryError> {
        UserRepository::search_by_name(query)
    }

    fn create_user(&self, new_user: &NewUser) -> Result<User, RepositoryError> {
        UserRepository::create(new_user)
    }

    fn update_user_name(&self, user_id: i32, name: &str) -> Result<(), RepositoryError> {
        UserRepository::update_name(user_id, name)
    }

    fn delete_user(&self, user_id: i32) -> Result<(), RepositoryError> {
        UserRepository::delete(user_id)
    }

    fn create_refresh_token(
        &self,
        new_refresh_token: &NewRefreshToken,
    ) -> Result<RefreshToken, RepositoryError> {
        RefreshTokenRepository::create(new_refresh_token)
    }

    fn find_refresh_token(&self, token: &str) -> Result<Option<RefreshToken>, RepositoryError> {
        RefreshTokenRepository::find_by_token(token)
    }

    fn delete_refresh_token(&self, token: &str) -> Result<(), RepositoryError> {
        RefreshTokenRepository::delete_by_token(token)
    }
}
