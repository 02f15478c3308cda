use crate::db::connection::get_connection;
use crate::db::error::RepositoryError;
use crate::db::models::review::{NewReview, Review, UpdateReview};
use crate::db::schema::reviews;
use diesel::prelude::*;

pub struct ReviewRepository;

impl ReviewRepository {
    pub fn create(new_review: &NewReview) -> Result<Review, RepositoryError> {
        let mut conn = get_connection()?;

        diesel::insert_into(reviews::table)
            .values(new_review)
            .get_result::<Review>(&mut conn)
            .map_err(Into::into)
    }

    pub fn list_by_user(user_id: i32) -> Result<Vec<Review>, RepositoryError> {
        let mut conn = get_connection()?;

        reviews::table
            .filter(reviews::user_id.eq(user_id))
            .load::<Review>(&mut conn)
            .map_err(Into::into)
    }

    pub fn list_all() -> Result<Vec<Review>, RepositoryError> {
        let mut conn = get_connection()?;

        reviews::table.load::<Review>(&mut conn).map_err(Into::into)
    }

    pub fn update(id: i32, changes: &UpdateReview) -> Result<(), RepositoryError> {
        let mut conn = get_connection()?;

        diesel::update(reviews::table.filter(reviews::id.eq(id)))
            .set(changes)
            .execute(&mut conn)?;

        Ok(())
    }

    pub fn delete(id: i32) -> Result<(), RepositoryError> {
        let mut conn = get_connection()?;

        diesel::delete(reviews::table.filter(reviews::id.eq(id))).execute(&mut conn)?;

        Ok(())
    }
}
