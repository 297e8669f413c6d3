use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::user::Role;

use crate::{
    model::{
        api::{DataResponse, EmptyDto, ErrorDto, ListResponse},
        course::{CourseDto, CreateCourseDto, UpdateCourseDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthToken},
        model::{
            course::{Course, CreateCourseParams, UpdateCourseParams},
            query::QueryParams,
        },
        service::course::CourseService,
        state::AppState,
        util::{extract::ValidatedJson, parse::parse_id},
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// Get courses.
///
/// Lists every course with advanced-results shaping. Each course carries the `id`,
/// `name` and `description` of its bootcamp.
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    tag = COURSE_TAG,
    params(
        ("select" = Option<String>, Query, description = "Comma separated fields to return"),
        ("sort" = Option<String>, Query, description = "Comma separated sort fields, `-` for descending (default: -createdAt)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Records per page (default: 25)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved courses", body = ListResponse),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = QueryParams::from_query(query.as_deref())?;

    let page = CourseService::new(&state.db)
        .get_paginated(&params)
        .await?
        .map(Course::into_dto);

    Ok((
        StatusCode::OK,
        Json(page.into_list_response(&params, &["bootcamp"])?),
    ))
}

/// Get every course of one bootcamp, unpaginated.
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/{id}/courses",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Bootcamp ID")),
    responses(
        (status = 200, description = "Courses of the bootcamp", body = ListResponse),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bootcamp_courses(
    State(state): State<AppState>,
    Path(bootcamp_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bootcamp_id = parse_id(&bootcamp_id, "Bootcamp")?;

    let courses = CourseService::new(&state.db)
        .get_by_bootcamp(bootcamp_id)
        .await?;
    let dtos: Vec<CourseDto> = courses.into_iter().map(Course::into_dto).collect();

    Ok((StatusCode::OK, Json(ListResponse::from_items(dtos)?)))
}

/// Get a single course with its bootcamp summary.
#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Successfully retrieved course", body = DataResponse<CourseDto>),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Course")?;

    let course = CourseService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(course.into_dto()))))
}

/// Add a course to a bootcamp.
///
/// The bootcamp's average cost is recomputed afterwards.
///
/// # Access Control
/// - `Publisher` - Only to their own bootcamp
/// - `Admin` - Any bootcamp
///
/// # Arguments
/// - `bootcamp_id` - Bootcamp receiving the course
/// - `payload` - Course fields
///
/// # Returns
/// - `201 Created` - The created course
/// - `404 Not Found` - No such bootcamp
#[utoipa::path(
    post,
    path = "/api/v1/bootcamps/{id}/courses",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Bootcamp ID")),
    request_body = CreateCourseDto,
    responses(
        (status = 201, description = "Successfully created course", body = DataResponse<CourseDto>),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not the bootcamp owner", body = ErrorDto),
        (status = 403, description = "User role not permitted", body = ErrorDto),
        (status = 404, description = "Bootcamp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_course(
    State(state): State<AppState>,
    token: AuthToken,
    Path(bootcamp_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CreateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &token)
        .require(&[Role::Publisher, Role::Admin])
        .await?;
    let bootcamp_id = parse_id(&bootcamp_id, "Bootcamp")?;

    let course = CourseService::new(&state.db)
        .create(bootcamp_id, &user, CreateCourseParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(course.into_dto()))))
}

/// Update a course.
///
/// # Access Control
/// - `Publisher` - Only their own course
/// - `Admin` - Any course
#[utoipa::path(
    put,
    path = "/api/v1/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    request_body = UpdateCourseDto,
    responses(
        (status = 200, description = "Successfully updated course", body = DataResponse<CourseDto>),
        (status = 400, description = "Invalid course data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not the owner", body = ErrorDto),
        (status = 403, description = "User role not permitted", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_course(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateCourseDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &token)
        .require(&[Role::Publisher, Role::Admin])
        .await?;
    let id = parse_id(&id, "Course")?;

    let course = CourseService::new(&state.db)
        .update(id, &user, UpdateCourseParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(course.into_dto()))))
}

/// Delete a course.
///
/// # Access Control
/// - `Publisher` - Only their own course
/// - `Admin` - Any course
#[utoipa::path(
    delete,
    path = "/api/v1/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Successfully deleted course", body = DataResponse<EmptyDto>),
        (status = 401, description = "User not authenticated or not the owner", body = ErrorDto),
        (status = 403, description = "User role not permitted", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &token)
        .require(&[Role::Publisher, Role::Admin])
        .await?;
    let id = parse_id(&id, "Course")?;

    CourseService::new(&state.db).delete(id, &user).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(EmptyDto::default()))))
}
