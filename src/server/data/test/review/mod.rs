use crate::server::{
    data::review::ReviewRepository,
    error::{unique_violation, AppError},
    model::{
        query::QueryParams,
        review::{CreateReviewParams, UpdateReviewParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update;

fn create_params(rating: i32) -> CreateReviewParams {
    CreateReviewParams {
        title: "Learned a ton".to_string(),
        text: "Great instructors".to_string(),
        rating,
    }
}
