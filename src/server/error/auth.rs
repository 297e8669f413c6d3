use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::user::Role;
use thiserror::Error;

use crate::model::api::ErrorDto;

const NOT_AUTHORIZED: &str = "Not authorized to access this route";

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried neither an `Authorization: Bearer` header nor a token cookie.
    #[error("No bearer token supplied")]
    MissingToken,

    /// Token failed signature, format or expiry verification.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    /// Token was valid but the user it names has since been deleted.
    #[error("User {0} from bearer token not found in database")]
    UserNotInDatabase(i32),

    /// Login with an unknown email or a wrong password.
    ///
    /// Both cases share one message so the response never reveals which
    /// emails are registered.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Current password supplied to the password update did not match.
    #[error("Password is incorrect")]
    IncorrectPassword,

    /// Authenticated user lacks one of the roles the route requires.
    #[error("User role {0} is not authorized to access this route")]
    RoleNotPermitted(Role),

    /// Authenticated user is neither the owner of the resource nor an admin.
    #[error("User {user_id} is not authorized to {action}")]
    NotOwner { user_id: i32, action: String },

    /// Password reset token is unknown or expired.
    #[error("Invalid token")]
    InvalidResetToken,

    /// Hashing a password failed.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems are logged at debug level and collapsed into the same generic 401 so
/// clients cannot tell a forged token from a stale one.
///
/// # Returns
/// - 400 Bad Request - For `InvalidResetToken`
/// - 401 Unauthorized - For token, credential and ownership failures
/// - 403 Forbidden - For `RoleNotPermitted`
/// - 500 Internal Server Error - For `PasswordHash`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(NOT_AUTHORIZED))).into_response()
            }
            Self::InvalidCredentials | Self::IncorrectPassword | Self::NotOwner { .. } => {
                (StatusCode::UNAUTHORIZED, Json(ErrorDto::new(self.to_string()))).into_response()
            }
            Self::RoleNotPermitted(_) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto::new(self.to_string()))).into_response()
            }
            Self::InvalidResetToken => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(self.to_string()))).into_response()
            }
            Self::PasswordHash(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Server Error")),
                )
                    .into_response()
            }
        }
    }
}
