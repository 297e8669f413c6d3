use super::*;

/// Tests the page window and total count.
///
/// Verifies that with 25 accounts the second page of ten holds ten records while the
/// total still counts every account.
///
/// Expected: Ok with 10 items and a total of 25
#[tokio::test]
async fn paginates_and_counts_all_matches() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..25 {
        factory::user::create_user(db).await?;
    }

    let query = QueryParams::from_query(Some("page=2&limit=10"))?;
    let page = UserRepository::new(db).get_paginated(&query).await?;

    assert_eq!(page.items.len(), 10);
    assert_eq!(page.total, 25);

    Ok(())
}

/// Tests equality filtering on the role column.
///
/// Expected: Ok with only publishers returned
#[tokio::test]
async fn filters_by_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    factory::user::create_user_with_role(db, Role::Publisher).await?;
    factory::user::create_user_with_role(db, Role::Publisher).await?;

    let query = QueryParams::from_query(Some("role=publisher"))?;
    let page = UserRepository::new(db).get_paginated(&query).await?;

    assert_eq!(page.total, 2);
    assert!(page.items.iter().all(|u| u.role == Role::Publisher));

    Ok(())
}

/// Tests ascending sort on a text field.
///
/// Expected: Ok with accounts ordered by name
#[tokio::test]
async fn sorts_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Bravo", "Alpha", "Charlie"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let query = QueryParams::from_query(Some("sort=name"))?;
    let page = UserRepository::new(db).get_paginated(&query).await?;

    let names: Vec<&str> = page.items.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);

    Ok(())
}

/// Tests that the newest account comes first without an explicit sort.
///
/// Expected: Ok with the last created account first
#[tokio::test]
async fn defaults_to_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;
    let newest = factory::user::create_user(db).await?;

    let page = UserRepository::new(db)
        .get_paginated(&QueryParams::default())
        .await?;

    assert_eq!(page.items[0].id, newest.id);

    Ok(())
}

/// Tests that filtering on a field outside the queryable set is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_unknown_field() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let query = QueryParams::from_query(Some("password=secret"))?;
    let result = UserRepository::new(db).get_paginated(&query).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
