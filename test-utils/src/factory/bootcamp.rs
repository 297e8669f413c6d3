//! Bootcamp factory for creating test bootcamp entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::bootcamp::{Career, Careers};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bootcamps with customizable fields.
///
/// The exclusive owner column is left empty unless `exclusive_owner()` is called,
/// so several factory bootcamps may share an owner.
pub struct BootcampFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    description: String,
    latitude: f64,
    longitude: f64,
    zipcode: Option<String>,
    careers: Vec<Career>,
    average_cost: Option<f64>,
    housing: bool,
    exclusive: bool,
}

impl<'a> BootcampFactory<'a> {
    /// Creates a new BootcampFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Bootcamp {id}"`
    /// - coordinates: Boston (42.3601, -71.0589)
    /// - careers: `[Web Development]`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Bootcamp {}", id),
            description: format!("Description for bootcamp {}", id),
            latitude: 42.3601,
            longitude: -71.0589,
            zipcode: Some("02118".to_string()),
            careers: vec![Career::WebDevelopment],
            average_cost: None,
            housing: false,
            exclusive: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn zipcode(mut self, zipcode: impl Into<String>) -> Self {
        self.zipcode = Some(zipcode.into());
        self
    }

    pub fn careers(mut self, careers: Vec<Career>) -> Self {
        self.careers = careers;
        self
    }

    pub fn average_cost(mut self, average_cost: f64) -> Self {
        self.average_cost = Some(average_cost);
        self
    }

    pub fn housing(mut self, housing: bool) -> Self {
        self.housing = housing;
        self
    }

    /// Claims the owner's single-bootcamp slot.
    pub fn exclusive_owner(mut self) -> Self {
        self.exclusive = true;
        self
    }

    /// Builds and inserts the bootcamp entity into the database.
    pub async fn build(self) -> Result<entity::bootcamp::Model, DbErr> {
        let slug = self.name.to_lowercase().replace(' ', "-");
        entity::bootcamp::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(slug),
            description: ActiveValue::Set(self.description),
            website: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            formatted_address: ActiveValue::Set(None),
            street: ActiveValue::Set(None),
            city: ActiveValue::Set(None),
            state: ActiveValue::Set(None),
            zipcode: ActiveValue::Set(self.zipcode),
            country: ActiveValue::Set(None),
            careers: ActiveValue::Set(Careers(self.careers)),
            average_rating: ActiveValue::Set(None),
            average_cost: ActiveValue::Set(self.average_cost),
            photo: ActiveValue::Set("no-photo.jpg".to_string()),
            housing: ActiveValue::Set(self.housing),
            job_assistance: ActiveValue::Set(false),
            job_guarantee: ActiveValue::Set(false),
            accept_gi: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            user_id: ActiveValue::Set(self.user_id),
            exclusive_owner_id: ActiveValue::Set(self.exclusive.then_some(self.user_id)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a bootcamp with default values owned by `user_id`.
pub async fn create_bootcamp(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::bootcamp::Model, DbErr> {
    BootcampFactory::new(db, user_id).build().await
}
