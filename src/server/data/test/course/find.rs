use super::*;

/// Tests that a single course is returned with its bootcamp summary.
///
/// Expected: Ok(Some) with the bootcamp name populated
#[tokio::test]
async fn find_by_id_populates_bootcamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let course = factory::course::create_course(db, bootcamp.id, owner.id).await?;

    let found = CourseRepository::new(db)
        .find_by_id(course.id)
        .await?
        .unwrap();

    let summary = found.bootcamp.unwrap();
    assert_eq!(summary.id, bootcamp.id);
    assert_eq!(summary.name, bootcamp.name);

    Ok(())
}

/// Tests listing the courses of one bootcamp.
///
/// Expected: only that bootcamp's courses, oldest first
#[tokio::test]
async fn lists_courses_of_bootcamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let (other_owner, other) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let first = factory::course::create_course(db, bootcamp.id, owner.id).await?;
    let second = factory::course::create_course(db, bootcamp.id, owner.id).await?;
    factory::course::create_course(db, other.id, other_owner.id).await?;

    let repo = CourseRepository::new(db);
    let courses = repo.get_by_bootcamp(bootcamp.id).await?;

    let ids: Vec<i32> = courses.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    let mut tuitions = repo.tuitions_for_bootcamp(bootcamp.id).await?;
    tuitions.sort_by(f64::total_cmp);
    assert_eq!(tuitions, vec![10000.0, 10000.0]);

    Ok(())
}
