use std::collections::HashMap;

use chrono::Utc;
use entity::course::Column;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::query::{self, AdvancedQuery, FieldKind, QueryField},
    error::AppError,
    model::{
        course::{Course, CreateCourseParams, UpdateCourseParams},
        query::{Page, QueryParams},
    },
};

impl AdvancedQuery for entity::course::Entity {
    const FIELDS: &'static [QueryField<Column>] = &[
        QueryField { name: "id", column: Column::Id, kind: FieldKind::Integer },
        QueryField { name: "title", column: Column::Title, kind: FieldKind::Text },
        QueryField { name: "description", column: Column::Description, kind: FieldKind::Text },
        QueryField { name: "weeks", column: Column::Weeks, kind: FieldKind::Text },
        QueryField { name: "tuition", column: Column::Tuition, kind: FieldKind::Number },
        QueryField { name: "minimumSkill", column: Column::MinimumSkill, kind: FieldKind::Text },
        QueryField {
            name: "scholarshipAvailable",
            column: Column::ScholarshipAvailable,
            kind: FieldKind::Boolean,
        },
        QueryField { name: "createdAt", column: Column::CreatedAt, kind: FieldKind::Text },
        QueryField { name: "bootcamp", column: Column::BootcampId, kind: FieldKind::Integer },
        QueryField { name: "user", column: Column::UserId, kind: FieldKind::Integer },
    ];

    const ID: Column = Column::Id;
}

pub struct CourseRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        bootcamp_id: i32,
        user_id: i32,
        params: CreateCourseParams,
    ) -> Result<Course, DbErr> {
        let course = entity::course::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            weeks: ActiveValue::Set(params.weeks),
            tuition: ActiveValue::Set(params.tuition),
            minimum_skill: ActiveValue::Set(params.minimum_skill),
            scholarship_available: ActiveValue::Set(params.scholarship_available),
            created_at: ActiveValue::Set(Utc::now()),
            bootcamp_id: ActiveValue::Set(bootcamp_id),
            user_id: ActiveValue::Set(user_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Course::from_entity(course, None))
    }

    /// Gets a course with its bootcamp summary populated.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Course>, DbErr> {
        let result = entity::prelude::Course::find_by_id(id)
            .find_also_related(entity::prelude::Bootcamp)
            .one(self.db)
            .await?;

        Ok(result.map(|(course, bootcamp)| Course::from_entity(course, bootcamp)))
    }

    /// Gets one page of courses with their bootcamp summaries populated.
    pub async fn get_paginated(&self, params: &QueryParams) -> Result<Page<Course>, AppError> {
        let page = query::fetch_page(self.db, entity::prelude::Course::find(), params).await?;

        let mut bootcamp_ids: Vec<i32> = page.items.iter().map(|c| c.bootcamp_id).collect();
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

        Ok(page.map(|course| {
            let bootcamp = bootcamps.get(&course.bootcamp_id).cloned();
            Course::from_entity(course, bootcamp)
        }))
    }

    /// Gets every course of a bootcamp, oldest first, without population.
    pub async fn get_by_bootcamp(&self, bootcamp_id: i32) -> Result<Vec<Course>, DbErr> {
        let courses = entity::prelude::Course::find()
            .filter(Column::BootcampId.eq(bootcamp_id))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?;

        Ok(courses
            .into_iter()
            .map(|c| Course::from_entity(c, None))
            .collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateCourseParams,
    ) -> Result<Option<Course>, DbErr> {
        let Some(course) = entity::prelude::Course::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::course::ActiveModel = course.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(weeks) = params.weeks {
            active.weeks = ActiveValue::Set(weeks);
        }
        if let Some(tuition) = params.tuition {
            active.tuition = ActiveValue::Set(tuition);
        }
        if let Some(minimum_skill) = params.minimum_skill {
            active.minimum_skill = ActiveValue::Set(minimum_skill);
        }
        if let Some(scholarship_available) = params.scholarship_available {
            active.scholarship_available = ActiveValue::Set(scholarship_available);
        }

        let course = active.update(self.db).await?;

        Ok(Some(Course::from_entity(course, None)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Course::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Tuition of every course offered by a bootcamp.
    pub async fn tuitions_for_bootcamp(&self, bootcamp_id: i32) -> Result<Vec<f64>, DbErr> {
        let courses = entity::prelude::Course::find()
            .filter(Column::BootcampId.eq(bootcamp_id))
            .all(self.db)
            .await?;

        Ok(courses.into_iter().map(|c| c.tuition).collect())
    }
}
