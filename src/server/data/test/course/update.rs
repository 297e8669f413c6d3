use super::*;

/// Tests a partial course update.
///
/// Expected: only the tuition changes
#[tokio::test]
async fn updates_tuition() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let course = factory::course::create_course(db, bootcamp.id, owner.id).await?;

    let updated = CourseRepository::new(db)
        .update(
            course.id,
            UpdateCourseParams {
                tuition: Some(12500.0),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.tuition, 12500.0);
    assert_eq!(updated.title, course.title);

    Ok(())
}

/// Tests deleting a course.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn deletes_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let course = factory::course::create_course(db, bootcamp.id, owner.id).await?;

    let repo = CourseRepository::new(db);
    assert!(repo.delete(course.id).await?);
    assert!(!repo.delete(course.id).await?);

    Ok(())
}
