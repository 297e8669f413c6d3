use chrono::{DateTime, Utc};
use entity::user::Role;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Public view of an account. The password hash and reset fields never leave the server.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[schema(value_type = String)]
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Account created by an admin. Unlike registration, any role may be assigned.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserDto {
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

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(min = 1, message = "Please add a name"))]
    pub name: Option<String>,
    #[validate(email(message = "Please add a valid email"))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
    #[schema(value_type = Option<String>)]
    pub role: Option<Role>,
}
