use axum::extract::Query;

use crate::auth::extractors::AuthClaims;
use crate::db::models::review::{NewReview, Review, UpdateReview};
use crate::db::repositories::review_repository::ReviewRepository;
use crate::dto::requests::{AddReviewRequest, DeleteReviewParams, UpdateReviewRequest};
use crate::dto::responses::OwnReview;
use crate::error::AppError;
use crate::extract::ApiJson;
use crate::response::ApiResponse;

/// POST /add-review
pub async fn add_review(
    claims: AuthClaims,
    ApiJson(payload): ApiJson<AddReviewRequest>,
) -> Result<ApiResponse<()>, AppError> {
    // A zero or negative rating counts as missing.
    let (Some(rating), Some(title), Some(description)) = (
        payload.rating.filter(|r| *r > 0),
        payload.title.filter(|t| !t.is_empty()),
        payload.description.filter(|d| !d.is_empty()),
    ) else {
        return Err(AppError::validation("Required Fields Missing!"));
    };

    let new_review = NewReview {
        user_id: claims.user_id,
        rating,
        title,
        description,
    };
    ReviewRepository::create(&new_review)?;

    Ok(ApiResponse::message("Review Added Successfully! 🥳"))
}

/// GET /get-user-reviews
/// Les reviews de l'appelant, sans la colonne user_id.
pub async fn get_user_reviews(
    claims: AuthClaims,
) -> Result<ApiResponse<Vec<OwnReview>>, AppError> {
    let reviews = ReviewRepository::list_by_user(claims.user_id)?
        .into_iter()
        .map(OwnReview::from)
        .collect();

    Ok(ApiResponse::ok("Reviews Fetched Successfully! 🥳", reviews))
}

/// GET /get-all-reviews
pub async fn get_all_reviews(_claims: AuthClaims) -> Result<ApiResponse<Vec<Review>>, AppError> {
    let reviews = ReviewRepository::list_all()?;
    Ok(ApiResponse::ok("Reviews Fetched Successfully! 🥳", reviews))
}

/// PATCH /update-review
pub async fn update_review(
    _claims: AuthClaims,
    ApiJson(payload): ApiJson<UpdateReviewRequest>,
) -> Result<ApiResponse<()>, AppError> {
    let id = payload
        .id
        .ok_or_else(|| AppError::validation("Review id is required!"))?;

    let changes = UpdateReview {
        rating: payload.rating,
        title: payload.title,
        description: payload.description,
    };

    if changes.rating.is_none() && changes.title.is_none() && changes.description.is_none() {
        return Err(AppError::validation(
            "At least one field (rating, title, description) must be provided to update.",
        ));
    }

    ReviewRepository::update(id, &changes)?;
    Ok(ApiResponse::message("Review Updated Successfully! 🥳"))
}

/// DELETE /delete-review?id=
/// The delete is awaited before responding, so a failure surfaces as a 500
/// instead of being silently dropped.
pub async fn delete_review(
    _claims: AuthClaims,
    Query(params): Query<DeleteReviewParams>,
) -> Result<ApiResponse<()>, AppError> {
    let id = params
        .id
        .ok_or_else(|| AppError::validation("Review id is required!"))?;

    ReviewRepository::delete(id)?;
    Ok(ApiResponse::message("Review Deleted Successfully! 🥳"))
}
