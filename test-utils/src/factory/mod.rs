//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert directly through SeaORM and bypass
//! the service layer, so derived fields (slug, averages) are only as correct as the
//! values passed in.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let bootcamp = factory::bootcamp::create_bootcamp(&db, user.id).await?;
//! let course = factory::course::create_course(&db, bootcamp.id, user.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(&db)
//!     .email("admin@example.com")
//!     .role(Role::Admin)
//!     .build()
//!     .await?;
//!
//! let bootcamp = factory::bootcamp::BootcampFactory::new(&db, admin.id)
//!     .name("Devworks Bootcamp")
//!     .coordinates(42.35, -71.06)
//!     .build()
//!     .await?;
//! ```

pub mod bootcamp;
pub mod course;
pub mod helpers;
pub mod review;
pub mod user;

pub use bootcamp::create_bootcamp;
pub use course::create_course;
pub use review::create_review;
pub use user::create_user;
