//! SeaORM entity declarations for the DevCamper schema.
//!
//! Tables are created by the `migration` crate at startup and directly from these
//! entities by `test-utils` for in-memory test databases, so column attributes
//! (uniqueness, nullability, foreign keys) must stay in sync with the migrations.

pub mod bootcamp;
pub mod course;
pub mod prelude;
pub mod review;
pub mod user;
