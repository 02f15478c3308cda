use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use std::convert::Infallible;

/// JSON body extractor for the envelope API.
///
/// A missing, empty, or malformed body deserializes to the request type's
/// `Default` (all fields absent), so the handler's own field validation
/// answers with the uniform envelope and the operation's message instead
/// of axum's plain-text `JsonRejection`.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(_) => Ok(ApiJson(T::default())),
        }
    }
}
