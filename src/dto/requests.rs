use serde::Deserialize;

// -------- REQUEST DTOs --------
//
// Fields are Option so a missing or empty value surfaces as the domain's
// own 400, not as a deserialization rejection.

#[derive(Deserialize, Debug, Clone, Default)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>, // Plain text
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SignupRequest {
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>, // Plain text
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct RefreshTokenRequest {
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct LogoutRequest {
    #[serde(rename = "refreshToken")]
    pub refresh_token: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct UpdateAccountRequest {
    pub name: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DeleteAccountRequest {
    pub password: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct AddReviewRequest {
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct UpdateReviewRequest {
    pub id: Option<i32>,
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct DeleteReviewParams {
    pub id: Option<i32>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct SearchUsersParams {
    pub search_query: Option<String>,
}
