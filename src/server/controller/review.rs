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
        review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthToken},
        model::{
            query::QueryParams,
            review::{CreateReviewParams, Review, UpdateReviewParams},
        },
        service::review::ReviewService,
        state::AppState,
        util::{extract::ValidatedJson, parse::parse_id},
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

/// Get reviews.
///
/// Lists every review with advanced-results shaping and the bootcamp summary populated.
#[utoipa::path(
    get,
    path = "/api/v1/reviews",
    tag = REVIEW_TAG,
    params(
        ("select" = Option<String>, Query, description = "Comma separated fields to return"),
        ("sort" = Option<String>, Query, description = "Comma separated sort fields, `-` for descending (default: -createdAt)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Records per page (default: 25)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved reviews", body = ListResponse),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = QueryParams::from_query(query.as_deref())?;

    let page = ReviewService::new(&state.db)
        .get_paginated(&params)
        .await?
        .map(Review::into_dto);

    Ok((
        StatusCode::OK,
        Json(page.into_list_response(&params, &["bootcamp"])?),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/{id}/reviews",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Bootcamp ID")),
    responses(
        (status = 200, description = "Reviews of the bootcamp", body = ListResponse),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bootcamp_reviews(
    State(state): State<AppState>,
    Path(bootcamp_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bootcamp_id = parse_id(&bootcamp_id, "Bootcamp")?;

    let reviews = ReviewService::new(&state.db)
        .get_by_bootcamp(bootcamp_id)
        .await?;
    let dtos: Vec<ReviewDto> = reviews.into_iter().map(Review::into_dto).collect();

    Ok((StatusCode::OK, Json(ListResponse::from_items(dtos)?)))
}

#[utoipa::path(
    get,
    path = "/api/v1/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Successfully retrieved review", body = DataResponse<ReviewDto>),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Review")?;

    let review = ReviewService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(review.into_dto()))))
}

/// Review a bootcamp.
///
/// A user may review each bootcamp once. The bootcamp's average rating is recomputed
/// afterwards.
///
/// # Access Control
/// - `User`, `Admin`
///
/// # Returns
/// - `201 Created` - The created review
/// - `400 Bad Request` - Invalid rating or the user already reviewed this bootcamp
/// - `404 Not Found` - No such bootcamp
#[utoipa::path(
    post,
    path = "/api/v1/bootcamps/{id}/reviews",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Bootcamp ID")),
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Successfully created review", body = DataResponse<ReviewDto>),
        (status = 400, description = "Invalid review or duplicate review", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User role not permitted", body = ErrorDto),
        (status = 404, description = "Bootcamp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_review(
    State(state): State<AppState>,
    token: AuthToken,
    Path(bootcamp_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &token)
        .require(&[Role::User, Role::Admin])
        .await?;
    let bootcamp_id = parse_id(&bootcamp_id, "Bootcamp")?;

    let review = ReviewService::new(&state.db)
        .create(bootcamp_id, &user, CreateReviewParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(review.into_dto()))))
}

/// Update a review.
///
/// # Access Control
/// - `User` - Only their own review
/// - `Admin` - Any review
#[utoipa::path(
    put,
    path = "/api/v1/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    request_body = UpdateReviewDto,
    responses(
        (status = 200, description = "Successfully updated review", body = DataResponse<ReviewDto>),
        (status = 400, description = "Invalid review data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not the author", body = ErrorDto),
        (status = 403, description = "User role not permitted", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_review(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &token)
        .require(&[Role::User, Role::Admin])
        .await?;
    let id = parse_id(&id, "Review")?;

    let review = ReviewService::new(&state.db)
        .update(id, &user, UpdateReviewParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(review.into_dto()))))
}

/// Delete a review.
///
/// # Access Control
/// - `User` - Only their own review
/// - `Admin` - Any review
#[utoipa::path(
    delete,
    path = "/api/v1/reviews/{id}",
    tag = REVIEW_TAG,
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Successfully deleted review", body = DataResponse<EmptyDto>),
        (status = 401, description = "User not authenticated or not the author", body = ErrorDto),
        (status = 403, description = "User role not permitted", body = ErrorDto),
        (status = 404, description = "Review not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_review(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &token)
        .require(&[Role::User, Role::Admin])
        .await?;
    let id = parse_id(&id, "Review")?;

    ReviewService::new(&state.db).delete(id, &user).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(EmptyDto::default()))))
}
