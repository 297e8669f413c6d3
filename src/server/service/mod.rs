//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership checks, the one-bootcamp rule, derived averages
//! - **Orchestration**: Coordinating repository calls with the geocoder and file storage
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod bootcamp;
pub mod course;
pub mod geocoder;
pub mod password;
pub mod review;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
