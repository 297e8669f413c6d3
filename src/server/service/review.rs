use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{bootcamp::BootcampRepository, review::ReviewRepository},
    error::{unique_violation, AppError},
    model::{
        query::{Page, QueryParams},
        review::{average_rating, CreateReviewParams, Review, UpdateReviewParams},
        user::User,
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of reviews with their bootcamp summaries
    pub async fn get_paginated(&self, params: &QueryParams) -> Result<Page<Review>, AppError> {
        ReviewRepository::new(self.db).get_paginated(params).await
    }

    /// Gets every review of a bootcamp
    pub async fn get_by_bootcamp(&self, bootcamp_id: i32) -> Result<Vec<Review>, AppError> {
        Ok(ReviewRepository::new(self.db)
            .get_by_bootcamp(bootcamp_id)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Review, AppError> {
        ReviewRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Adds `user`'s review of a bootcamp and refreshes the bootcamp's average rating.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(AppError::NotFound)` - No bootcamp with that id
    /// - `Err(AppError::BadRequest)` - The user already reviewed this bootcamp
    pub async fn create(
        &self,
        bootcamp_id: i32,
        user: &User,
        params: CreateReviewParams,
    ) -> Result<Review, AppError> {
        BootcampRepository::new(self.db)
            .find_by_id(bootcamp_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No bootcamp with the id of {}", bootcamp_id))
            })?;

        let txn = self.db.begin().await?;
        let review = ReviewRepository::new(&txn)
            .create(bootcamp_id, user.id, params)
            .await
            .map_err(|err| match unique_violation(&err) {
                Some(_) => AppError::BadRequest(format!(
                    "User {} has already reviewed bootcamp {}",
                    user.id, bootcamp_id
                )),
                None => err.into(),
            })?;
        refresh_average_rating(&txn, bootcamp_id).await?;
        txn.commit().await?;

        Ok(review)
    }

    pub async fn update(
        &self,
        id: i32,
        user: &User,
        params: UpdateReviewParams,
    ) -> Result<Review, AppError> {
        let review = ReviewRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        user.ensure_can_modify(review.user_id, format!("update review {}", id))?;

        let txn = self.db.begin().await?;
        let updated = ReviewRepository::new(&txn)
            .update(id, params)
            .await?
            .ok_or_else(|| not_found(id))?;
        refresh_average_rating(&txn, updated.bootcamp_id).await?;
        txn.commit().await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32, user: &User) -> Result<(), AppError> {
        let review = ReviewRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        user.ensure_can_modify(review.user_id, format!("delete review {}", id))?;

        let txn = self.db.begin().await?;
        if !ReviewRepository::new(&txn).delete(id).await? {
            return Err(not_found(id));
        }
        refresh_average_rating(&txn, review.bootcamp_id).await?;
        txn.commit().await?;

        Ok(())
    }
}

/// Recomputes a bootcamp's average rating on the connection that changed its reviews.
async fn refresh_average_rating<C: ConnectionTrait>(
    db: &C,
    bootcamp_id: i32,
) -> Result<(), AppError> {
    let ratings = ReviewRepository::new(db)
        .ratings_for_bootcamp(bootcamp_id)
        .await?;

    BootcampRepository::new(db)
        .set_average_rating(bootcamp_id, average_rating(&ratings))
        .await?;

    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("No review with the id of {}", id))
}
