//! Review factory for creating test review entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews with customizable fields.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    bootcamp_id: i32,
    user_id: i32,
    title: String,
    rating: i32,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with a rating of 8.
    pub fn new(db: &'a DatabaseConnection, bootcamp_id: i32, user_id: i32) -> Self {
        Self {
            db,
            bootcamp_id,
            user_id,
            title: format!("Review {}", next_id()),
            rating: 8,
        }
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            title: ActiveValue::Set(self.title),
            text: ActiveValue::Set("Review text".to_string()),
            rating: ActiveValue::Set(self.rating),
            created_at: ActiveValue::Set(Utc::now()),
            bootcamp_id: ActiveValue::Set(self.bootcamp_id),
            user_id: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values.
pub async fn create_review(
    db: &DatabaseConnection,
    bootcamp_id: i32,
    user_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, bootcamp_id, user_id).build().await
}
