use super::*;

/// Tests a partial review update.
///
/// Expected: rating changed, text kept
#[tokio::test]
async fn updates_rating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let reviewer = factory::user::create_user(db).await?;
    let review = factory::review::create_review(db, bootcamp.id, reviewer.id).await?;

    let updated = ReviewRepository::new(db)
        .update(
            review.id,
            UpdateReviewParams {
                rating: Some(2),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.rating, 2);
    assert_eq!(updated.text, review.text);

    Ok(())
}

/// Tests deleting a review.
///
/// Expected: Ok(true), then the review is gone
#[tokio::test]
async fn deletes_review() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, bootcamp) = factory::helpers::create_bootcamp_with_owner(db).await?;
    let reviewer = factory::user::create_user(db).await?;
    let review = factory::review::create_review(db, bootcamp.id, reviewer.id).await?;

    let repo = ReviewRepository::new(db);
    assert!(repo.delete(review.id).await?);
    assert!(repo.find_by_id(review.id).await?.is_none());

    Ok(())
}
