use entity::user::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Returned by register, login and reset password alongside the `token` cookie.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub success: bool,
    pub token: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please add a name"))]
    pub name: String,
    #[serde(default)]
    #[validate(email(message = "Please add a valid email"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateDetailsDto {
    #[validate(length(min = 1, message = "Please add a name"))]
    pub name: Option<String>,
    #[validate(email(message = "Please add a valid email"))]
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordDto {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub new_password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ForgotPasswordDto {
    #[serde(default)]
    #[validate(email(message = "Please add a valid email"))]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ResetPasswordDto {
    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}
