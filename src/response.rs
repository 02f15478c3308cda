use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Uniform response envelope returned by every endpoint.
///
/// # Examples
///
/// ```ignore
/// ApiResponse::ok("You're in!", TokenData { .. })
/// ApiResponse::message("Successfully logged out.")
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// 200 OK with a data payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            status_code: 200,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// 200 OK with a message only
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: true,
            status_code: 200,
            message: message.into(),
            data: None,
        }
    }

    /// Failure envelope with the given HTTP status
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status: false,
            status_code,
            message: message.into(),
            data: None,
        }
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
