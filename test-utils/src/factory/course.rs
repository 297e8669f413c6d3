//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::course::MinimumSkill;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    bootcamp_id: i32,
    user_id: i32,
    title: String,
    tuition: f64,
    minimum_skill: MinimumSkill,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Course {id}"`
    /// - tuition: `10000.0`
    /// - minimum_skill: `MinimumSkill::Beginner`
    pub fn new(db: &'a DatabaseConnection, bootcamp_id: i32, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            bootcamp_id,
            user_id,
            title: format!("Course {}", id),
            tuition: 10000.0,
            minimum_skill: MinimumSkill::Beginner,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn tuition(mut self, tuition: f64) -> Self {
        self.tuition = tuition;
        self
    }

    pub fn minimum_skill(mut self, minimum_skill: MinimumSkill) -> Self {
        self.minimum_skill = minimum_skill;
        self
    }

    /// Builds and inserts the course entity into the database.
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set("Course description".to_string()),
            weeks: ActiveValue::Set("8".to_string()),
            tuition: ActiveValue::Set(self.tuition),
            minimum_skill: ActiveValue::Set(self.minimum_skill),
            scholarship_available: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            bootcamp_id: ActiveValue::Set(self.bootcamp_id),
            user_id: ActiveValue::Set(self.user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a course with default values.
pub async fn create_course(
    db: &DatabaseConnection,
    bootcamp_id: i32,
    user_id: i32,
) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db, bootcamp_id, user_id).build().await
}
