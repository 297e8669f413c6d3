//! HTTP request handlers.
//!
//! Handlers authenticate through `AuthGuard`, convert DTOs into parameter types, call
//! the matching service and wrap the result in the `{ success, data }` envelope.
//! Every handler returns `Result<_, AppError>` so failures share one response shape.

pub mod auth;
pub mod bootcamp;
pub mod course;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
