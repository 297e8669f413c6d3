use entity::{bootcamp::Career, user::Role};
use sea_orm::{ConnectionTrait, DbErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, upload::UploadError, AppError},
    model::{
        bootcamp::{CreateBootcampParams, PhotoUpload, UpdateBootcampParams},
        course::{CreateCourseParams, UpdateCourseParams},
        review::{CreateReviewParams, UpdateReviewParams},
        user::{AccountChanges, NewAccount, User},
    },
    service::{
        auth::AuthService,
        bootcamp::BootcampService,
        course::CourseService,
        password::{hash_password, verify_password},
        review::ReviewService,
        user::UserService,
    },
    state::UploadSettings,
    testing::{location, token_service, StaticGeocoder, TEST_MAX_UPLOAD},
};


const ADDRESS: &str = "233 Bay State Rd Boston MA 02215";

fn geocoder() -> StaticGeocoder {
    StaticGeocoder::new()
        .with(ADDRESS, location(42.3601, -71.0589, "Boston", "02215"))
        .with("02118", location(42.3355, -71.0723, "Boston", "02118"))
}

fn bootcamp_params(name: &str) -> CreateBootcampParams {
    CreateBootcampParams {
        name: name.to_string(),
        description: "Full stack web development".to_string(),
        website: None,
        phone: None,
        email: None,
        address: ADDRESS.to_string(),
        careers: vec![Career::WebDevelopment],
        housing: false,
        job_assistance: true,
        job_guarantee: false,
        accept_gi: false,
    }
}

fn user(model: &entity::user::Model) -> User {
    User::from_entity(model.clone())
}
