use super::*;

/// Tests renaming a bootcamp.
///
/// Expected: name and slug change, location untouched without a new address
#[tokio::test]
async fn renames_and_reslugs() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let updated = BootcampRepository::new(db)
        .update(
            bootcamp.id,
            UpdateBootcampParams {
                name: Some("Codemasters Academy".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Codemasters Academy");
    assert_eq!(updated.slug, "codemasters-academy");
    assert_eq!(updated.location.latitude, bootcamp.latitude);

    Ok(())
}

/// Tests replacing the location.
///
/// Expected: every location column taken from the new geocoder result
#[tokio::test]
async fn replaces_location() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let updated = BootcampRepository::new(db)
        .update(bootcamp.id, UpdateBootcampParams::default(), Some(boston()))
        .await?
        .unwrap();

    assert_eq!(updated.location, boston());

    Ok(())
}

/// Tests storing derived averages.
///
/// Expected: values readable through find_by_id
#[tokio::test]
async fn stores_averages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let repo = BootcampRepository::new(db);
    repo.set_average_cost(bootcamp.id, Some(9000.0)).await?;
    repo.set_average_rating(bootcamp.id, Some(7.5)).await?;

    let stored = repo.find_by_id(bootcamp.id).await?.unwrap();
    assert_eq!(stored.average_cost, Some(9000.0));
    assert_eq!(stored.average_rating, Some(7.5));

    Ok(())
}

/// Tests updating a bootcamp that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_bootcamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BootcampRepository::new(db)
        .update(999, UpdateBootcampParams::default(), None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
