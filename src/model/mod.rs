//! Request and response DTOs shared by every API endpoint.
//!
//! Request payloads derive `validator::Validate` so field rules are checked before any
//! business logic runs. Response types serialise into the `{ success, ... }` envelope.

pub mod api;
pub mod auth;
pub mod bootcamp;
pub mod course;
pub mod review;
pub mod user;
