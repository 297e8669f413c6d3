use super::*;

/// Tests filtering reviews by minimum rating.
///
/// Expected: only reviews rated 8 or higher, with the bootcamp summary populated
#[tokio::test]
async fn filters_by_rating() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    for rating in [3, 8, 10] {
        let reviewer = factory::user::create_user(db).await?;
        factory::review::ReviewFactory::new(db, bootcamp.id, reviewer.id)
            .rating(rating)
            .build()
            .await?;
    }

    let query = QueryParams::from_query(Some("rating[gte]=8&sort=rating"))?;
    let page = ReviewRepository::new(db).get_paginated(&query).await?;

    assert_eq!(page.total, 2);
    let ratings: Vec<i32> = page.items.iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![8, 10]);
    assert!(page.items.iter().all(|r| r.bootcamp.is_some()));

    Ok(())
}

/// Tests filtering reviews by bootcamp reference.
///
/// Expected: only the reviews of the requested bootcamp
#[tokio::test]
async fn filters_by_bootcamp() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let (_, second) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let reviewer = factory::user::create_user(db).await?;
    factory::review::create_review(db, first.id, reviewer.id).await?;
    factory::review::create_review(db, second.id, reviewer.id).await?;

    let query = QueryParams::from_query(Some(&format!("bootcamp={}", second.id)))?;
    let page = ReviewRepository::new(db).get_paginated(&query).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].bootcamp_id, second.id);

    Ok(())
}
