use super::*;

/// Tests tuition range filtering with the bootcamp summary populated.
///
/// Expected: only courses above the bound, each with its bootcamp summary
#[tokio::test]
async fn filters_by_tuition() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    factory::course::CourseFactory::new(db, bootcamp.id, owner.id)
        .tuition(5000.0)
        .build()
        .await?;
    let expensive = factory::course::CourseFactory::new(db, bootcamp.id, owner.id)
        .tuition(15000.0)
        .build()
        .await?;

    let query = QueryParams::from_query(Some("tuition[gt]=10000"))?;
    let page = CourseRepository::new(db).get_paginated(&query).await?;

    assert_eq!(page.total, 1);
    let course = &page.items[0];
    assert_eq!(course.id, expensive.id);
    assert_eq!(
        course.bootcamp.as_ref().map(|b| b.name.as_str()),
        Some(bootcamp.name.as_str())
    );

    Ok(())
}

/// Tests filtering on an enumerated text field.
///
/// Expected: only advanced courses
#[tokio::test]
async fn filters_by_minimum_skill() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    factory::course::create_course(db, bootcamp.id, owner.id).await?;
    factory::course::CourseFactory::new(db, bootcamp.id, owner.id)
        .minimum_skill(MinimumSkill::Advanced)
        .build()
        .await?;

    let query = QueryParams::from_query(Some("minimumSkill=advanced"))?;
    let page = CourseRepository::new(db).get_paginated(&query).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].minimum_skill, MinimumSkill::Advanced);

    Ok(())
}
