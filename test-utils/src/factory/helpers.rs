//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to keep unique columns (email, bootcamp name and slug) distinct across
/// factory-created rows.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a publisher together with the bootcamp they own.
///
/// # Returns
/// - `Ok((user, bootcamp))` - Created owner and bootcamp
/// - `Err(DbErr)` - Database error during creation
pub async fn create_bootcamp_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::bootcamp::Model), DbErr> {
    let user = crate::factory::user::UserFactory::new(db)
        .role(entity::user::Role::Publisher)
        .build()
        .await?;
    let bootcamp = crate::factory::bootcamp::create_bootcamp(db, user.id).await?;

    Ok((user, bootcamp))
}
