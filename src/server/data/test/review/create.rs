use super::*;

/// Tests writing a review.
///
/// Expected: Ok with every field stored
#[tokio::test]
async fn creates_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let reviewer = factory::user::create_user(db).await?;

    let review = ReviewRepository::new(db)
        .create(bootcamp.id, reviewer.id, create_params(9))
        .await?;

    assert_eq!(review.title, "Learned a ton");
    assert_eq!(review.rating, 9);
    assert_eq!(review.bootcamp_id, bootcamp.id);
    assert_eq!(review.user_id, reviewer.id);

    Ok(())
}

/// Tests that a user can review a bootcamp only once.
///
/// Expected: Err with a unique violation on the second review
#[tokio::test]
async fn rejects_second_review_by_same_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let reviewer = factory::user::create_user(db).await?;

    let repo = ReviewRepository::new(db);
    repo.create(bootcamp.id, reviewer.id, create_params(9))
        .await?;
    let err = repo
        .create(bootcamp.id, reviewer.id, create_params(3))
        .await
        .unwrap_err();

    assert!(unique_violation(&err).is_some());

    Ok(())
}

/// Tests that the same user may review different bootcamps.
///
/// Expected: Ok for both reviews
#[tokio::test]
async fn allows_reviews_of_different_bootcamps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, first) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let (_, second) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let reviewer = factory::user::create_user(db).await?;

    let repo = ReviewRepository::new(db);
    repo.create(first.id, reviewer.id, create_params(9)).await?;
    repo.create(second.id, reviewer.id, create_params(4)).await?;

    let mut ratings = repo.ratings_for_bootcamp(first.id).await?;
    ratings.extend(repo.ratings_for_bootcamp(second.id).await?);
    assert_eq!(ratings, vec![9, 4]);

    Ok(())
}
