use axum::http::{header, Method, StatusCode};
use entity::user::Role;
use sea_orm::DbErr;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    service::password::hash_password,
    testing::{location, token_for, StaticGeocoder, TestApp, TEST_MAX_UPLOAD},
};

mod user;

const ADDRESS: &str = "233 Bay State Rd Boston MA 02215";

fn geocoder() -> StaticGeocoder {
    StaticGeocoder::new()
        .with(ADDRESS, location(42.3601, -71.0589, "Boston", "02215"))
        .with("02118", location(42.3355, -71.0723, "Boston", "02118"))
}

fn bootcamp_body(name: &str) -> Value {
    json!({
        "name": name,
        "description": "Full stack web development",
        "website": "https://devworks.com",
        "email": "enroll@devworks.com",
        "address": ADDRESS,
        "careers": ["Web Development", "UI/UX"],
        "housing": true,
        "jobAssistance": true
    })
}

fn error_message(body: &Value) -> &str {
    assert_eq!(body["success"], json!(false));
    body["error"].as_str().unwrap_or_default()
}
