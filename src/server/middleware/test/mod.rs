use axum::{
    extract::FromRequestParts,
    http::{header, Request},
};
use entity::user::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, AuthToken},
    testing::{token_for, StaticGeocoder, TestApp},
};

mod guard;
