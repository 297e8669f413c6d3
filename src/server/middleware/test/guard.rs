use super::*;

/// Tests a request without a token.
///
/// Expected: MissingToken
#[tokio::test]
async fn rejects_missing_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = TestApp::new(db, StaticGeocoder::new());

    let token = AuthToken(None);
    let result = AuthGuard::new(&app.state, &token).require(&[]).await;

    assert!(matches!(result, Err(AppError::AuthErr(AuthError::MissingToken))));

    Ok(())
}

/// Tests a token that fails verification.
///
/// Expected: InvalidToken
#[tokio::test]
async fn rejects_invalid_token() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = TestApp::new(db, StaticGeocoder::new());

    let token = AuthToken(Some("not-a-jwt".to_string()));
    let result = AuthGuard::new(&app.state, &token).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests a valid token whose user was deleted.
///
/// Expected: UserNotInDatabase with the token's user id
#[tokio::test]
async fn rejects_token_of_deleted_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = TestApp::new(db, StaticGeocoder::new());

    let user = factory::user::create_user(db).await?;
    let token = AuthToken(Some(token_for(&user)));
    crate::server::data::user::UserRepository::new(db)
        .delete(user.id)
        .await?;

    let result = AuthGuard::new(&app.state, &token).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) if id == user.id
    ));

    Ok(())
}

/// Tests role restrictions.
///
/// Expected: RoleNotPermitted for a user on a publisher route; Ok with no restriction
#[tokio::test]
async fn enforces_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = TestApp::new(db, StaticGeocoder::new());

    let user = factory::user::create_user(db).await?;
    let token = AuthToken(Some(token_for(&user)));
    let guard = AuthGuard::new(&app.state, &token);

    let denied = guard.require(&[Role::Publisher, Role::Admin]).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::RoleNotPermitted(Role::User)))
    ));

    let allowed = guard.require(&[]).await.unwrap();
    assert_eq!(allowed.id, user.id);

    Ok(())
}

/// Tests an admin passing an admin-only route.
///
/// Expected: Ok with the admin
#[tokio::test]
async fn admits_permitted_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = TestApp::new(db, StaticGeocoder::new());

    let admin = factory::user::create_user_with_role(db, Role::Admin).await?;
    let token = AuthToken(Some(token_for(&admin)));

    let user = AuthGuard::new(&app.state, &token)
        .require(&[Role::Admin])
        .await
        .unwrap();

    assert_eq!(user.role, Role::Admin);

    Ok(())
}
