use super::*;

/// Tests that user management is admin-only.
///
/// Expected: 403 for a publisher, 200 for an admin
#[tokio::test]
async fn user_routes_require_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = TestApp::new(db, StaticGeocoder::new());

    let publisher = factory::user::create_user_with_role(db, Role::Publisher).await?;
    let admin = factory::user::create_user_with_role(db, Role::Admin).await?;

    let (status, _) = app
        .json(Method::GET, "/api/v1/users", Some(&token_for(&publisher)), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .json(Method::GET, "/api/v1/users", Some(&token_for(&admin)), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(2));

    Ok(())
}

/// Tests the admin create, update and delete cycle.
///
/// Expected: 201, role changed, then 404 after delete
#[tokio::test]
async fn admin_manages_accounts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = TestApp::new(db, StaticGeocoder::new());

    let admin = factory::user::create_user_with_role(db, Role::Admin).await?;
    let token = token_for(&admin);

    let (status, body) = app
        .json(
            Method::POST,
            "/api/v1/users",
            Some(&token),
            Some(json!({
                "name": "New Admin",
                "email": "second-admin@example.com",
                "password": "123456",
                "role": "admin"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["role"], json!("admin"));
    let id = body["data"]["id"].as_i64().unwrap();

    let uri = format!("/api/v1/users/{}", id);
    let (status, body) = app
        .json(Method::PUT, &uri, Some(&token), Some(json!({ "role": "user" })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["role"], json!("user"));

    let (status, _) = app.json(Method::DELETE, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.json(Method::GET, &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
