use crate::db::connection::get_connection;
use crate::db::error::RepositoryError;
use crate::db::models::user::{NewUser, User, UserSummary};
use crate::db::schema::users;
use diesel::prelude::*;

pub struct UserRepository;

impl UserRepository {
    pub fn find_by_email(email: &str) -> Result<Option<User>, RepositoryError> {
        let mut conn = get_connection()?;

        users::table
            .filter(users::email.eq(email))
            .first::<User>(&mut conn)
            .optional()
            .map_err(Into::into)
    }

    pub fn find_by_id(user_id: i32) -> Result<Option<User>, RepositoryError> {
        let mut conn = get_connection()?;

        users::table
            .filter(users::user_id.eq(user_id))
            .first::<User>(&mut conn)
            .optional()
            .map_err(Into::into)
    }

    /// Projection publique (user_id, name, email) pour /who-is
    pub fn find_summary_by_id(user_id: i32) -> Result<Option<UserSummary>, RepositoryError> {
        let mut conn = get_connection()?;

        users::table
            .filter(users::user_id.eq(user_id))
            .select((users::user_id, users::name, users::email))
            .first::<UserSummary>(&mut conn)
            .optional()
            .map_err(Into::into)
    }

    /// Recherche par nom (ILIKE: substring, insensible à la casse)
    pub fn search_by_name(query: &str) -> Result<Vec<UserSummary>, RepositoryError> {
        let mut conn = get_connection()?;
        let pattern = format!("%{}%", query);

        users::table
            .filter(users::name.ilike(pattern))
            .select((users::user_id, users::name, users::email))
            .load::<UserSummary>(&mut conn)
            .map_err(Into::into)
    }

    pub fn create(new_user: &NewUser) -> Result<User, RepositoryError> {
        let mut conn = get_connection()?;

        diesel::insert_into(users::table)
            .values(new_user)
            .get_result::<User>(&mut conn)
            .map_err(Into::into)
    }

    pub fn update_name(user_id: i32, name: &str) -> Result<(), RepositoryError> {
        let mut conn = get_connection()?;

        diesel::update(users::table.filter(users::user_id.eq(user_id)))
            .set(users::name.eq(name))
            .execute(&mut conn)?;

        Ok(())
    }

    pub fn delete(user_id: i32) -> Result<(), RepositoryError> {
        let mut conn = get_connection()?;

        diesel::delete(users::table.filter(users::user_id.eq(user_id))).execute(&mut conn)?;

        Ok(())
    }
}
