use crate::db::connection::get_connection;
use crate::db::error::RepositoryError;
use crate::db::models::refresh_token::{NewRefreshToken, RefreshToken};
use crate::db::schema::refresh_tokens;
use diesel::prelude::*;

pub struct RefreshTokenRepository;

impl RefreshTokenRepository {
    pub fn create(new_refresh_token: &NewRefreshToken) -> Result<RefreshToken, RepositoryError> {
        let mut conn = get_connection()?;

        diesel::insert_into(refresh_tokens::table)
            .values(new_refresh_token)
            .get_result::<RefreshToken>(&mut conn)
            .map_err(Into::into)
    }

    /// Le store est la source de vérité pour la révocation: un token
    /// supprimé au logout n'est plus retrouvé ici, quelle que soit la
    /// validité de sa signature.
    pub fn find_by_token(token: &str) -> Result<Option<RefreshToken>, RepositoryError> {
        let mut conn = get_connection()?;

        refresh_tokens::table
            .filter(refresh_tokens::token.eq(token))
            .first::<RefreshToken>(&mut conn)
            .optional()
            .map_err(Into::into)
    }

    /// Idempotent: supprimer un token absent n'est pas une erreur.
    pub fn delete_by_token(token: &str) -> Result<(), RepositoryError> {
        let mut conn = get_connection()?;

        diesel::delete(refresh_tokens::table.filter(refresh_tokens::token.eq(token)))
            .execute(&mut conn)?;

        Ok(())
    }
}
