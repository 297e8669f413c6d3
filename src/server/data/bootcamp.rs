use std::collections::HashMap;

use chrono::Utc;
use entity::bootcamp::{Careers, Column};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionSession, TransactionTrait,
};

use crate::server::{
    data::query::{self, AdvancedQuery, FieldKind, QueryField},
    error::AppError,
    model::{
        bootcamp::{slugify, Bootcamp, CreateBootcampParams, UpdateBootcampParams, DEFAULT_PHOTO},
        course::Course,
        geo::{GeoLocation, GeoPoint, SearchArea},
        query::{Page, QueryParams},
    },
};

impl AdvancedQuery for entity::bootcamp::Entity {
    const FIELDS: &'static [QueryField<Column>] = &[
        QueryField { name: "id", column: Column::Id, kind: FieldKind::Integer },
        QueryField { name: "name", column: Column::Name, kind: FieldKind::Text },
        QueryField { name: "slug", column: Column::Slug, kind: FieldKind::Text },
        QueryField { name: "description", column: Column::Description, kind: FieldKind::Text },
        QueryField { name: "website", column: Column::Website, kind: FieldKind::Text },
        QueryField { name: "phone", column: Column::Phone, kind: FieldKind::Text },
        QueryField { name: "email", column: Column::Email, kind: FieldKind::Text },
        QueryField { name: "location.city", column: Column::City, kind: FieldKind::Text },
        QueryField { name: "location.state", column: Column::State, kind: FieldKind::Text },
        QueryField { name: "location.zipcode", column: Column::Zipcode, kind: FieldKind::Text },
        QueryField { name: "location.country", column: Column::Country, kind: FieldKind::Text },
        QueryField { name: "careers", column: Column::Careers, kind: FieldKind::Tags },
        QueryField { name: "averageRating", column: Column::AverageRating, kind: FieldKind::Number },
        QueryField { name: "averageCost", column: Column::AverageCost, kind: FieldKind::Number },
        QueryField { name: "photo", column: Column::Photo, kind: FieldKind::Text },
        QueryField { name: "housing", column: Column::Housing, kind: FieldKind::Boolean },
        QueryField { name: "jobAssistance", column: Column::JobAssistance, kind: FieldKind::Boolean },
        QueryField { name: "jobGuarantee", column: Column::JobGuarantee, kind: FieldKind::Boolean },
        QueryField { name: "acceptGi", column: Column::AcceptGi, kind: FieldKind::Boolean },
        QueryField { name: "createdAt", column: Column::CreatedAt, kind: FieldKind::Text },
        QueryField { name: "user", column: Column::UserId, kind: FieldKind::Integer },
    ];

    const ID: Column = Column::Id;
}

pub struct BootcampRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BootcampRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a bootcamp at a geocoded location.
    ///
    /// When `exclusive` is set the owner id is also written to the unique
    /// `exclusive_owner_id` column, so a second exclusive bootcamp for the same owner
    /// fails with a unique violation instead of racing a read-then-write check.
    ///
    /// # Arguments
    /// - `params` - Validated bootcamp fields
    /// - `location` - Geocoded address
    /// - `user_id` - Owner of the new bootcamp
    /// - `exclusive` - Whether the owner is limited to this one bootcamp
    ///
    /// # Returns
    /// - `Ok(Bootcamp)` - The created bootcamp
    /// - `Err(DbErr)` - Database error, including unique violations on name, slug or owner
    pub async fn create(
        &self,
        params: CreateBootcampParams,
        location: GeoLocation,
        user_id: i32,
        exclusive: bool,
    ) -> Result<Bootcamp, DbErr> {
        let bootcamp = entity::bootcamp::ActiveModel {
            slug: ActiveValue::Set(slugify(&params.name)),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            website: ActiveValue::Set(params.website),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            latitude: ActiveValue::Set(location.latitude),
            longitude: ActiveValue::Set(location.longitude),
            formatted_address: ActiveValue::Set(location.formatted_address),
            street: ActiveValue::Set(location.street),
            city: ActiveValue::Set(location.city),
            state: ActiveValue::Set(location.state),
            zipcode: ActiveValue::Set(location.zipcode),
            country: ActiveValue::Set(location.country),
            careers: ActiveValue::Set(Careers(params.careers)),
            average_rating: ActiveValue::Set(None),
            average_cost: ActiveValue::Set(None),
            photo: ActiveValue::Set(DEFAULT_PHOTO.to_string()),
            housing: ActiveValue::Set(params.housing),
            job_assistance: ActiveValue::Set(params.job_assistance),
            job_guarantee: ActiveValue::Set(params.job_guarantee),
            accept_gi: ActiveValue::Set(params.accept_gi),
            created_at: ActiveValue::Set(Utc::now()),
            user_id: ActiveValue::Set(user_id),
            exclusive_owner_id: ActiveValue::Set(exclusive.then_some(user_id)),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Bootcamp::from_entity(bootcamp))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Bootcamp>, DbErr> {
        let bootcamp = entity::prelude::Bootcamp::find_by_id(id).one(self.db).await?;

        Ok(bootcamp.map(Bootcamp::from_entity))
    }

    /// Gets one page of bootcamps, each with its courses inlined.
    pub async fn get_paginated(
        &self,
        params: &QueryParams,
    ) -> Result<Page<(Bootcamp, Vec<Course>)>, AppError> {
        let page = query::fetch_page(self.db, entity::prelude::Bootcamp::find(), params).await?;

        let ids: Vec<i32> = page.items.iter().map(|b| b.id).collect();
        let mut courses_by_bootcamp: HashMap<i32, Vec<Course>> = HashMap::new();
        if !ids.is_empty() {
            let courses = entity::prelude::Course::find()
                .filter(entity::course::Column::BootcampId.is_in(ids))
                .all(self.db)
                .await?;
            for course in courses {
                courses_by_bootcamp
                    .entry(course.bootcamp_id)
                    .or_default()
                    .push(Course::from_entity(course, None));
            }
        }

        Ok(page.map(|bootcamp| {
            let courses = courses_by_bootcamp.remove(&bootcamp.id).unwrap_or_default();
            (Bootcamp::from_entity(bootcamp), courses)
        }))
    }

    /// Finds every bootcamp within the search area.
    ///
    /// A latitude/longitude rectangle narrows the rows in SQL; the exact great-circle
    /// test then runs on the candidates.
    pub async fn find_within(&self, area: &SearchArea) -> Result<Vec<Bootcamp>, DbErr> {
        let bbox = area.bounding_box();

        let mut select = entity::prelude::Bootcamp::find()
            .filter(Column::Latitude.between(bbox.min_lat, bbox.max_lat));
        if !bbox.wraps() {
            select = select.filter(Column::Longitude.between(bbox.min_lng, bbox.max_lng));
        }

        let bootcamps = select.all(self.db).await?;

        Ok(bootcamps
            .into_iter()
            .filter(|b| {
                area.contains(&GeoPoint {
                    latitude: b.latitude,
                    longitude: b.longitude,
                })
            })
            .map(Bootcamp::from_entity)
            .collect())
    }

    /// Applies a partial update, replacing the location when one is supplied.
    ///
    /// # Returns
    /// - `Ok(Some(Bootcamp))` - The updated bootcamp
    /// - `Ok(None)` - No bootcamp with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateBootcampParams,
        location: Option<GeoLocation>,
    ) -> Result<Option<Bootcamp>, DbErr> {
        let Some(bootcamp) = entity::prelude::Bootcamp::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::bootcamp::ActiveModel = bootcamp.into();
        if let Some(name) = params.name {
            active.slug = ActiveValue::Set(slugify(&name));
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(website) = params.website {
            active.website = ActiveValue::Set(Some(website));
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(Some(email));
        }
        if let Some(location) = location {
            active.latitude = ActiveValue::Set(location.latitude);
            active.longitude = ActiveValue::Set(location.longitude);
            active.formatted_address = ActiveValue::Set(location.formatted_address);
            active.street = ActiveValue::Set(location.street);
            active.city = ActiveValue::Set(location.city);
            active.state = ActiveValue::Set(location.state);
            active.zipcode = ActiveValue::Set(location.zipcode);
            active.country = ActiveValue::Set(location.country);
        }
        if let Some(careers) = params.careers {
            active.careers = ActiveValue::Set(Careers(careers));
        }
        if let Some(housing) = params.housing {
            active.housing = ActiveValue::Set(housing);
        }
        if let Some(job_assistance) = params.job_assistance {
            active.job_assistance = ActiveValue::Set(job_assistance);
        }
        if let Some(job_guarantee) = params.job_guarantee {
            active.job_guarantee = ActiveValue::Set(job_guarantee);
        }
        if let Some(accept_gi) = params.accept_gi {
            active.accept_gi = ActiveValue::Set(accept_gi);
        }

        let bootcamp = active.update(self.db).await?;

        Ok(Some(Bootcamp::from_entity(bootcamp)))
    }

    pub async fn set_photo(&self, id: i32, photo: String) -> Result<(), DbErr> {
        entity::bootcamp::ActiveModel {
            id: ActiveValue::Unchanged(id),
            photo: ActiveValue::Set(photo),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    pub async fn set_average_cost(&self, id: i32, average_cost: Option<f64>) -> Result<(), DbErr> {
        entity::bootcamp::ActiveModel {
            id: ActiveValue::Unchanged(id),
            average_cost: ActiveValue::Set(average_cost),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    pub async fn set_average_rating(
        &self,
        id: i32,
        average_rating: Option<f64>,
    ) -> Result<(), DbErr> {
        entity::bootcamp::ActiveModel {
            id: ActiveValue::Unchanged(id),
            average_rating: ActiveValue::Set(average_rating),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> BootcampRepository<'a, C> {
    /// Deletes a bootcamp together with its courses and reviews in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - Bootcamp and dependents deleted
    /// - `Ok(false)` - No bootcamp with that id; nothing was changed
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Course::delete_many()
            .filter(entity::course::Column::BootcampId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Review::delete_many()
            .filter(entity::review::Column::BootcampId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Bootcamp::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        txn.commit().await?;

        Ok(true)
    }
}
