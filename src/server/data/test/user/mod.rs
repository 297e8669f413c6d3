use crate::server::{
    data::user::UserRepository,
    error::{unique_violation, AppError},
    model::{
        query::QueryParams,
        user::{CreateUserParams, UpdateUserParams},
    },
};
use chrono::{Duration, Utc};
use entity::user::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod reset_token;
mod update;

fn params(name: &str, email: &str, role: Role) -> CreateUserParams {
    CreateUserParams {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role,
    }
}
