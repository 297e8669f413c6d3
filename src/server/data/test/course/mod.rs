use crate::server::{
    data::course::CourseRepository,
    error::AppError,
    model::{
        course::{CreateCourseParams, UpdateCourseParams},
        query::QueryParams,
    },
};
use entity::course::MinimumSkill;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find;
mod get_paginated;
mod update;

fn create_params(title: &str, tuition: f64) -> CreateCourseParams {
    CreateCourseParams {
        title: title.to_string(),
        description: "Learn the full stack".to_string(),
        weeks: "12".to_string(),
        tuition,
        minimum_skill: MinimumSkill::Intermediate,
        scholarship_available: true,
    }
}
