use super::*;

/// Tests creating a bootcamp at a geocoded location.
///
/// Verifies that the slug is derived from the name, the default photo is set and the
/// location columns are filled from the geocoder result.
///
/// Expected: Ok with bootcamp created
#[tokio::test]
async fn creates_bootcamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let bootcamp = BootcampRepository::new(db)
        .create(create_params("Devworks Bootcamp"), boston(), user.id, true)
        .await?;

    assert_eq!(bootcamp.name, "Devworks Bootcamp");
    assert_eq!(bootcamp.slug, "devworks-bootcamp");
    assert_eq!(bootcamp.photo, DEFAULT_PHOTO);
    assert_eq!(bootcamp.location.city.as_deref(), Some("Boston"));
    assert_eq!(bootcamp.careers, vec![Career::WebDevelopment, Career::UiUx]);
    assert_eq!(bootcamp.user_id, user.id);
    assert!(bootcamp.average_cost.is_none());

    Ok(())
}

/// Tests that an exclusive owner cannot create a second bootcamp.
///
/// Expected: Err with a unique violation on the exclusive owner column
#[tokio::test]
async fn rejects_second_exclusive_bootcamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = BootcampRepository::new(db);
    repo.create(create_params("First Camp"), boston(), user.id, true)
        .await?;
    let err = repo
        .create(create_params("Second Camp"), boston(), user.id, true)
        .await
        .unwrap_err();

    let message = unique_violation(&err).unwrap();
    assert!(message.contains("exclusive_owner_id"));

    Ok(())
}

/// Tests that a non-exclusive owner may create several bootcamps.
///
/// Expected: Ok for both bootcamps
#[tokio::test]
async fn allows_several_non_exclusive_bootcamps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, entity::user::Role::Admin).await?;
    let repo = BootcampRepository::new(db);
    repo.create(create_params("First Camp"), boston(), admin.id, false)
        .await?;
    repo.create(create_params("Second Camp"), boston(), admin.id, false)
        .await?;

    Ok(())
}

/// Tests that bootcamp names are unique.
///
/// Expected: Err with a unique violation
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, entity::user::Role::Admin).await?;
    let repo = BootcampRepository::new(db);
    repo.create(create_params("Same Name"), boston(), admin.id, false)
        .await?;
    let err = repo
        .create(create_params("Same Name"), boston(), admin.id, false)
        .await
        .unwrap_err();

    assert!(unique_violation(&err).is_some());

    Ok(())
}
