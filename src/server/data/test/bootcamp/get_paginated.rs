use super::*;

/// Tests that each bootcamp on the page carries its own courses.
///
/// Expected: courses grouped under the right bootcamp
#[tokio::test]
async fn inlines_courses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, with_courses) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let (_, without_courses) = factory::helpers::create_bootcamp_with_owner(db).await?;
    factory::course::create_course(db, with_courses.id, owner.id).await?;
    factory::course::create_course(db, with_courses.id, owner.id).await?;

    let page = BootcampRepository::new(db)
        .get_paginated(&QueryParams::default())
        .await?;

    assert_eq!(page.total, 2);
    for (bootcamp, courses) in &page.items {
        if bootcamp.id == with_courses.id {
            assert_eq!(courses.len(), 2);
            assert!(courses.iter().all(|c| c.bootcamp_id == with_courses.id));
        } else {
            assert_eq!(bootcamp.id, without_courses.id);
            assert!(courses.is_empty());
        }
    }

    Ok(())
}

/// Tests a numeric comparison filter.
///
/// Expected: only bootcamps with an average cost at or below the bound
#[tokio::test]
async fn filters_by_average_cost() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, entity::user::Role::Admin).await?;
    let cheap = factory::bootcamp::BootcampFactory::new(db, admin.id)
        .average_cost(8000.0)
        .build()
        .await?;
    factory::bootcamp::BootcampFactory::new(db, admin.id)
        .average_cost(12000.0)
        .build()
        .await?;

    let query = QueryParams::from_query(Some("averageCost[lte]=10000"))?;
    let page = BootcampRepository::new(db).get_paginated(&query).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].0.id, cheap.id);

    Ok(())
}

/// Tests career membership filtering.
///
/// Expected: bootcamps offering any of the listed careers
#[tokio::test]
async fn filters_by_career_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, entity::user::Role::Admin).await?;
    factory::bootcamp::BootcampFactory::new(db, admin.id)
        .careers(vec![Career::WebDevelopment])
        .build()
        .await?;
    factory::bootcamp::BootcampFactory::new(db, admin.id)
        .careers(vec![Career::DataScience, Career::Business])
        .build()
        .await?;
    factory::bootcamp::BootcampFactory::new(db, admin.id)
        .careers(vec![Career::MobileDevelopment])
        .build()
        .await?;

    let repo = BootcampRepository::new(db);

    let query = QueryParams::from_query(Some("careers=Business"))?;
    assert_eq!(repo.get_paginated(&query).await?.total, 1);

    let query = QueryParams::from_query(Some("careers[in]=Business,Web Development"))?;
    assert_eq!(repo.get_paginated(&query).await?.total, 2);

    Ok(())
}

/// Tests boolean and dotted location filters together.
///
/// Expected: only the bootcamp matching both conditions
#[tokio::test]
async fn combines_filters() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_user_with_role(db, entity::user::Role::Admin).await?;
    let target = factory::bootcamp::BootcampFactory::new(db, admin.id)
        .housing(true)
        .zipcode("02215")
        .build()
        .await?;
    factory::bootcamp::BootcampFactory::new(db, admin.id)
        .housing(false)
        .zipcode("02215")
        .build()
        .await?;
    factory::bootcamp::BootcampFactory::new(db, admin.id)
        .housing(true)
        .zipcode("10001")
        .build()
        .await?;

    let query = QueryParams::from_query(Some("housing=true&location.zipcode=02215"))?;
    let page = BootcampRepository::new(db).get_paginated(&query).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].0.id, target.id);

    Ok(())
}

/// Tests that a malformed numeric value is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_malformed_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let query = QueryParams::from_query(Some("averageCost[gt]=cheap"))?;
    let result = BootcampRepository::new(db).get_paginated(&query).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
