use crate::server::{
    data::bootcamp::BootcampRepository,
    error::{unique_violation, AppError},
    model::{
        bootcamp::{CreateBootcampParams, UpdateBootcampParams, DEFAULT_PHOTO},
        geo::{GeoLocation, GeoPoint, SearchArea},
        query::QueryParams,
    },
};
use entity::{
    bootcamp::Career,
    prelude::{Course, Review},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_within;
mod get_paginated;
mod update;

const BOSTON: (f64, f64) = (42.3601, -71.0589);
const CAMBRIDGE: (f64, f64) = (42.3736, -71.1097);
const PROVIDENCE: (f64, f64) = (41.8240, -71.4128);
const NEW_YORK: (f64, f64) = (40.7128, -74.0060);

fn create_params(name: &str) -> CreateBootcampParams {
    CreateBootcampParams {
        name: name.to_string(),
        description: "Full stack web development".to_string(),
        website: Some("https://devworks.com".to_string()),
        phone: Some("(111) 111-1111".to_string()),
        email: Some("enroll@devworks.com".to_string()),
        address: "233 Bay State Rd Boston MA 02215".to_string(),
        careers: vec![Career::WebDevelopment, Career::UiUx],
        housing: true,
        job_assistance: true,
        job_guarantee: false,
        accept_gi: true,
    }
}

fn boston() -> GeoLocation {
    GeoLocation {
        latitude: BOSTON.0,
        longitude: BOSTON.1,
        formatted_address: Some("233 Bay State Rd, Boston, MA 02215, US".to_string()),
        street: Some("233 Bay State Rd".to_string()),
        city: Some("Boston".to_string()),
        state: Some("MA".to_string()),
        zipcode: Some("02215".to_string()),
        country: Some("US".to_string()),
    }
}
