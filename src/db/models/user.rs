use crate::db::schema::users;
use diesel::{Insertable, Queryable, Selectable};
use serde::Serialize;

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub user_id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Public projection of a user row (never carries the password hash).
#[derive(Queryable, Debug, Clone, Serialize)]
pub struct UserSummary {
    pub user_id: i32,
    pub name: String,
    pub email: String,
}
