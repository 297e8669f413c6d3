use super::*;

/// Tests that deleting a bootcamp removes its courses and reviews.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn deletes_courses_and_reviews() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let reviewer = factory::user::create_user(db).await?;
    factory::course::create_course(db, bootcamp.id, owner.id).await?;
    factory::review::create_review(db, bootcamp.id, reviewer.id).await?;

    let (_, other) = factory::helpers::create_bootcamp_with_owner(db).await?;
    factory::course::create_course(db, other.id, owner.id).await?;

    let repo = BootcampRepository::new(db);
    assert!(repo.delete(bootcamp.id).await?);

    assert!(repo.find_by_id(bootcamp.id).await?.is_none());
    assert_eq!(Course::find().count(db).await?, 1);
    assert_eq!(Review::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a bootcamp that does not exist.
///
/// Expected: Ok(false) and nothing removed
#[tokio::test]
async fn returns_false_for_missing_bootcamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    factory::course::create_course(db, bootcamp.id, owner.id).await?;

    assert!(!BootcampRepository::new(db).delete(999).await?);
    assert_eq!(Course::find().count(db).await?, 1);

    Ok(())
}
