//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`, making it the single place where failures become status codes
//! and `{ success: false, error }` bodies.

pub mod auth;
pub mod config;
pub mod upload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, upload::UploadError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (400, 401 or 403 depending on the failure).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Photo upload rejected or failed to persist.
    #[error(transparent)]
    UploadErr(#[from] UploadError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations become 400 Bad Request with
    /// "Duplicate field value entered"; everything else is a logged 500.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// HTTP client request error from reqwest (geocoder calls).
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Filesystem error outside of the upload path (startup directory creation).
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Response serialization failure.
    #[error(transparent)]
    SerdeErr(#[from] serde_json::Error),

    /// Request payload failed field validation.
    ///
    /// Results in 400 Bad Request whose message joins every violated rule.
    #[error(transparent)]
    ValidationErr(#[from] ValidationErrors),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Returns the driver message when `err` is a unique constraint violation.
///
/// The message names the violated column or index, which lets callers turn specific
/// violations (one bootcamp per publisher, one review per user) into precise messages.
pub fn unique_violation(err: &DbErr) -> Option<String> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => Some(message),
        _ => None,
    }
}

/// Joins every violated validation rule into a single client-facing message.
///
/// Messages are sorted so the response is stable regardless of hash map ordering.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match &error.message {
                Some(message) => message.to_string(),
                None => format!("Invalid value for {}", field),
            };
            messages.push(message);
        }
    }

    messages.sort();
    messages.dedup();
    messages.join(", ")
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `ValidationErr` and duplicate key violations
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types (DbErr, ReqwestErr, etc.)
/// - Variable - For `AuthErr` and `UploadErr`, delegated to their own `into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::UploadErr(err) => err.into_response(),
            Self::ValidationErr(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(validation_message(&errors))))
                    .into_response()
            }
            Self::DbErr(err) if unique_violation(&err).is_some() => {
                tracing::debug!("Duplicate key rejected: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::new("Duplicate field value entered")),
                )
                    .into_response()
            }
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new("Server Error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Server Error" message to the client to
/// avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Server Error")),
        )
            .into_response()
    }
}
