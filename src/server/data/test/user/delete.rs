use super::*;

/// Tests deleting an account.
///
/// Expected: Ok(true), then the account is gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests deleting an account that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db).delete(999).await?);

    Ok(())
}
