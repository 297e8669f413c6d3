//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! The `query` module holds the advanced-results shaping shared by every list endpoint.

pub mod bootcamp;
pub mod course;
pub mod query;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
