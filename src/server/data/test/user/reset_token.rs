use super::*;

/// Tests looking up an account by an unexpired reset token digest.
///
/// Expected: Ok(Some) for the holder of the token
#[tokio::test]
async fn finds_unexpired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);
    repo.set_reset_token(user.id, "digest".to_string(), Utc::now() + Duration::minutes(10))
        .await?;

    let found = repo.find_by_reset_token("digest", Utc::now()).await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests that an expired token no longer matches.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);
    repo.set_reset_token(user.id, "digest".to_string(), Utc::now() - Duration::minutes(1))
        .await?;

    let found = repo.find_by_reset_token("digest", Utc::now()).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that resetting the password replaces the hash and consumes the token.
///
/// Expected: new hash stored, token no longer found
#[tokio::test]
async fn reset_password_clears_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);
    repo.set_reset_token(user.id, "digest".to_string(), Utc::now() + Duration::minutes(10))
        .await?;

    repo.reset_password(user.id, "new-hash".to_string()).await?;

    assert!(repo.find_by_reset_token("digest", Utc::now()).await?.is_none());
    let updated = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(updated.password_hash, "new-hash");

    Ok(())
}
