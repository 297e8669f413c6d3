//! DevCamper Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the DevCamper
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for seeding users, bootcamps, courses and reviews.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_bootcamp_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_all_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (owner, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
