use super::*;

/// Tests adding a course to a bootcamp.
///
/// Expected: Ok with every field stored and the bootcamp left unpopulated
#[tokio::test]
async fn creates_course() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let course = CourseRepository::new(db)
        .create(bootcamp.id, owner.id, create_params("Front End", 8000.0))
        .await?;

    assert_eq!(course.title, "Front End");
    assert_eq!(course.tuition, 8000.0);
    assert_eq!(course.minimum_skill, MinimumSkill::Intermediate);
    assert!(course.scholarship_available);
    assert_eq!(course.bootcamp_id, bootcamp.id);
    assert_eq!(course.user_id, owner.id);
    assert!(course.bootcamp.is_none());

    Ok(())
}
