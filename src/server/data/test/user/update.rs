use super::*;

/// Tests that a partial update leaves unspecified columns untouched.
///
/// Expected: Ok(Some) with only the name and role changed
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let updated = UserRepository::new(db)
        .update(
            user.id,
            UpdateUserParams {
                name: Some("Renamed".to_string()),
                role: Some(Role::Publisher),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.role, Role::Publisher);
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.password_hash, user.password);

    Ok(())
}

/// Tests updating an account that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(999, UpdateUserParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
