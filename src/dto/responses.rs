use serde::Serialize;

use crate::auth::extractors::AuthClaims;
use crate::db::models::review::Review;

#[derive(Serialize, Debug)]
pub struct TokenPair {
    pub token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

#[derive(Serialize, Debug)]
pub struct AccessToken {
    pub token: String,
}

/// Identity echoed back on /who-am-i, straight from the verified claims.
#[derive(Serialize, Debug)]
pub struct Identity {
    pub user_id: i32,
    pub name: String,
    pub email: String,
}

impl From<AuthClaims> for Identity {
    fn from(claims: AuthClaims) -> Self {
        Self {
            user_id: claims.user_id,
            name: claims.name,
            email: claims.email,
        }
    }
}

/// A review as returned to its owner (the owning user_id is implied).
#[derive(Serialize, Debug)]
pub struct OwnReview {
    pub id: i32,
    pub rating: i32,
    pub title: String,
    pub description: String,
}

impl From<Review> for OwnReview {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            rating: review.rating,
            title: review.title,
            description: review.description,
        }
    }
}
