use std::collections::HashMap;

use chrono::Utc;
use entity::review::Column;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::query::{self, AdvancedQuery, FieldKind, QueryField},
    error::AppError,
    model::{
        query::{Page, QueryParams},
        review::{CreateReviewParams, Review, UpdateReviewParams},
    },
};

impl AdvancedQuery for entity::review::Entity {
    const FIELDS: &'static [QueryField<Column>] = &[
        QueryField { name: "id", column: Column::Id, kind: FieldKind::Integer },
        QueryField { name: "title", column: Column::Title, kind: FieldKind::Text },
        QueryField { name: "text", column: Column::Text, kind: FieldKind::Text },
        QueryField { name: "rating", column: Column::Rating, kind: FieldKind::Integer },
        QueryField { name: "createdAt", column: Column::CreatedAt, kind: FieldKind::Text },
        QueryField { name: "bootcamp", column: Column::BootcampId, kind: FieldKind::Integer },
        QueryField { name: "user", column: Column::UserId, kind: FieldKind::Integer },
    ];

    const ID: Column = Column::Id;
}

pub struct ReviewRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReviewRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a review.
    ///
    /// # Returns
    /// - `Ok(Review)` - The created review
    /// - `Err(DbErr)` - Database error, including a unique violation when the user
    ///   already reviewed this bootcamp
    pub async fn create(
        &self,
        bootcamp_id: i32,
        user_id: i32,
        params: CreateReviewParams,
    ) -> Result<Review, DbErr> {
        let review = entity::review::ActiveModel {
            title: ActiveValue::Set(params.title),
            text: ActiveValue::Set(params.text),
            rating: ActiveValue::Set(params.rating),
            created_at: ActiveValue::Set(Utc::now()),
            bootcamp_id: ActiveValue::Set(bootcamp_id),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Review::from_entity(review, None))
    }

    /// Gets a review with its bootcamp summary populated.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Review>, DbErr> {
        let result = entity::prelude::Review::find_by_id(id)
            .find_also_related(entity::prelude::Bootcamp)
            .one(self.db)
            .await?;

        Ok(result.map(|(review, bootcamp)| Review::from_entity(review, bootcamp)))
    }

    /// Gets one page of reviews with their bootcamp summaries populated.
    pub async fn get_paginated(&self, params: &QueryParams) -> Result<Page<Review>, AppError> {
        let page = query::fetch_page(self.db, entity::prelude::Review::find(), params).await?;

        let mut bootcamp_ids: Vec<i32> = page.items.iter().map(|r| r.bootcamp_id).collect();
        bootcamp_ids.sort_unstable();
        bootcamp_ids.dedup();

        let bootcamps: HashMap<i32, entity::bootcamp::Model> = if !bootcamp_ids.is_empty() {
            entity::prelude::Bootcamp::find()
                .filter(entity::bootcamp::Column::Id.is_in(bootcamp_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|b| (b.id, b))
                .collect()
        } else {
            HashMap::new()
        };

        Ok(page.map(|review| {
            let bootcamp = bootcamps.get(&review.bootcamp_id).cloned();
            Review::from_entity(review, bootcamp)
        }))
    }

    /// Gets every review of a bootcamp, oldest first, without population.
    pub async fn get_by_bootcamp(&self, bootcamp_id: i32) -> Result<Vec<Review>, DbErr> {
        let reviews = entity::prelude::Review::find()
            .filter(Column::BootcampId.eq(bootcamp_id))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        Ok(reviews
            .into_iter()
            .map(|r| Review::from_entity(r, None))
            .collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateReviewParams,
    ) -> Result<Option<Review>, DbErr> {
        let Some(review) = entity::prelude::Review::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::review::ActiveModel = review.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(text) = params.text {
            active.text = ActiveValue::Set(text);
        }
        if let Some(rating) = params.rating {
            active.rating = ActiveValue::Set(rating);
        }

        let review = active.update(self.db).await?;

        Ok(Some(Review::from_entity(review, None)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Rating of every review of a bootcamp.
    pub async fn ratings_for_bootcamp(&self, bootcamp_id: i32) -> Result<Vec<i32>, DbErr> {
        let reviews = entity::prelude::Review::find()
            .filter(Column::BootcampId.eq(bootcamp_id))
            .all(self.db)
            .await?;

        Ok(reviews.into_iter().map(|r| r.rating).collect())
    }
}
