use super::*;

/// Tests creating an account.
///
/// Verifies that the repository stores every supplied field and that the account
/// can be found again by email.
///
/// Expected: Ok with the account created
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(params("Jane Doe", "jane@example.com", Role::Publisher))
        .await?;

    assert_eq!(user.name, "Jane Doe");
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.role, Role::Publisher);
    assert_eq!(user.password_hash, "hash");

    let found = repo.find_by_email("jane@example.com").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that a second account with the same email is rejected.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("First", "same@example.com", Role::User))
        .await?;
    let result = repo
        .create(params("Second", "same@example.com", Role::User))
        .await;

    let err = result.unwrap_err();
    assert!(unique_violation(&err).is_some());

    Ok(())
}
