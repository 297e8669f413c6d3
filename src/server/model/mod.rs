//! Domain models and operation parameter types.
//!
//! Domain models are produced by the data layer from SeaORM entities (`from_entity`)
//! and converted to API DTOs at the controller boundary (`into_dto`). Parameter types
//! carry validated request input from controllers into services.

pub mod bootcamp;
pub mod course;
pub mod geo;
pub mod query;
pub mod review;
pub mod user;
