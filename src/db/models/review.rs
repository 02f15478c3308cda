use crate::db::schema::reviews;
use diesel::{AsChangeset, Insertable, Queryable, Selectable};
use serde::Serialize;

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = reviews)]
pub struct NewReview {
    pub user_id: i32,
    pub rating: i32,
    pub title: String,
    pub description: String,
}

#[derive(Queryable, Selectable, Debug, Clone, Serialize)]
#[diesel(table_name = reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Review {
    pub id: i32,
    pub user_id: i32,
    pub rating: i32,
    pub title: String,
    pub description: String,
}

/// Partial update; at least one field must be set before this reaches diesel.
#[derive(AsChangeset, Debug, Clone, Default)]
#[diesel(table_name = reviews)]
pub struct UpdateReview {
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
}
