use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        Path, RawQuery, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::user::Role;

use crate::{
    model::{
        api::{DataResponse, EmptyDto, ErrorDto, ListResponse},
        bootcamp::{BootcampDto, CreateBootcampDto, UpdateBootcampDto},
    },
    server::{
        error::{upload::UploadError, AppError},
        middleware::auth::{AuthGuard, AuthToken},
        model::{
            bootcamp::{CreateBootcampParams, PhotoUpload, UpdateBootcampParams},
            course::Course,
            query::QueryParams,
        },
        service::bootcamp::BootcampService,
        state::AppState,
        util::{
            extract::ValidatedJson,
            parse::{parse_distance, parse_id},
        },
    },
};

/// Tag for grouping bootcamp endpoints in OpenAPI documentation
pub static BOOTCAMP_TAG: &str = "bootcamp";

/// Multipart field carrying the photo.
const PHOTO_FIELD: &str = "file";

/// Get bootcamps.
///
/// Lists bootcamps with advanced-results shaping: field filters with optional
/// `[gt|gte|lt|lte|in]` operators, `select`, `sort`, `page` and `limit`. Each bootcamp
/// carries its courses inline.
///
/// # Returns
/// - `200 OK` - One page of bootcamps with `count` and `pagination`
/// - `400 Bad Request` - Unknown field, operator or malformed value
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps",
    tag = BOOTCAMP_TAG,
    params(
        ("select" = Option<String>, Query, description = "Comma separated fields to return"),
        ("sort" = Option<String>, Query, description = "Comma separated sort fields, `-` for descending (default: -createdAt)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Records per page (default: 25)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bootcamps", body = ListResponse),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bootcamps(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    let params = QueryParams::from_query(query.as_deref())?;

    let page = BootcampService::new(&state.db, state.geocoder.as_ref())
        .get_paginated(&params)
        .await?
        .map(|(bootcamp, courses)| {
            bootcamp.into_dto(Some(courses.into_iter().map(Course::into_dto).collect()))
        });

    Ok((
        StatusCode::OK,
        Json(page.into_list_response(&params, &["courses"])?),
    ))
}

/// Get a single bootcamp.
///
/// # Returns
/// - `200 OK` - The bootcamp
/// - `404 Not Found` - No bootcamp with that id, or the id is malformed
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/{id}",
    tag = BOOTCAMP_TAG,
    params(("id" = i32, Path, description = "Bootcamp ID")),
    responses(
        (status = 200, description = "Successfully retrieved bootcamp", body = DataResponse<BootcampDto>),
        (status = 404, description = "Bootcamp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bootcamp(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, "Bootcamp")?;

    let bootcamp = BootcampService::new(&state.db, state.geocoder.as_ref())
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(bootcamp.into_dto(None)))))
}

/// Create a new bootcamp.
///
/// The address is geocoded into the stored location. Publishers may own a single
/// bootcamp; admins are not limited.
///
/// # Access Control
/// - `Publisher`, `Admin`
///
/// # Returns
/// - `201 Created` - The created bootcamp
/// - `400 Bad Request` - Validation failure, duplicate name, or the publisher already owns a bootcamp
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Role not permitted
#[utoipa::path(
    post,
    path = "/api/v1/bootcamps",
    tag = BOOTCAMP_TAG,
    request_body = CreateBootcampDto,
    responses(
        (status = 201, description = "Successfully created bootcamp", body = DataResponse<BootcampDto>),
        (status = 400, description = "Invalid bootcamp data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User role not permitted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_bootcamp(
    State(state): State<AppState>,
    token: AuthToken,
    ValidatedJson(payload): ValidatedJson<CreateBootcampDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &token)
        .require(&[Role::Publisher, Role::Admin])
        .await?;

    let bootcamp = BootcampService::new(&state.db, state.geocoder.as_ref())
        .create(&user, CreateBootcampParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(bootcamp.into_dto(None))),
    ))
}

/// Update a bootcamp.
///
/// # Access Control
/// - `Publisher` - Only their own bootcamp
/// - `Admin` - Any bootcamp
#[utoipa::path(
    put,
    path = "/api/v1/bootcamps/{id}",
    tag = BOOTCAMP_TAG,
    params(("id" = i32, Path, description = "Bootcamp ID")),
    request_body = UpdateBootcampDto,
    responses(
        (status = 200, description = "Successfully updated bootcamp", body = DataResponse<BootcampDto>),
        (status = 400, description = "Invalid bootcamp data", body = ErrorDto),
        (status = 401, description = "User not authenticated or not the owner", body = ErrorDto),
        (status = 403, description = "User role not permitted", body = ErrorDto),
        (status = 404, description = "Bootcamp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_bootcamp(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateBootcampDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &token)
        .require(&[Role::Publisher, Role::Admin])
        .await?;
    let id = parse_id(&id, "Bootcamp")?;

    let bootcamp = BootcampService::new(&state.db, state.geocoder.as_ref())
        .update(id, &user, UpdateBootcampParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(bootcamp.into_dto(None)))))
}

/// Delete a bootcamp along with its courses and reviews.
///
/// # Access Control
/// - `Publisher` - Only their own bootcamp
/// - `Admin` - Any bootcamp
#[utoipa::path(
    delete,
    path = "/api/v1/bootcamps/{id}",
    tag = BOOTCAMP_TAG,
    params(("id" = i32, Path, description = "Bootcamp ID")),
    responses(
        (status = 200, description = "Successfully deleted bootcamp", body = DataResponse<EmptyDto>),
        (status = 401, description = "User not authenticated or not the owner", body = ErrorDto),
        (status = 403, description = "User role not permitted", body = ErrorDto),
        (status = 404, description = "Bootcamp not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_bootcamp(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &token)
        .require(&[Role::Publisher, Role::Admin])
        .await?;
    let id = parse_id(&id, "Bootcamp")?;

    BootcampService::new(&state.db, state.geocoder.as_ref())
        .delete(id, &user)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(EmptyDto::default()))))
}

/// Get bootcamps within a radius of a postal code.
///
/// # Returns
/// - `200 OK` - Every bootcamp within `distance` miles
/// - `400 Bad Request` - Distance is not a non-negative number
/// - `404 Not Found` - Postal code could not be located
#[utoipa::path(
    get,
    path = "/api/v1/bootcamps/radius/{zipcode}/{distance}",
    tag = BOOTCAMP_TAG,
    params(
        ("zipcode" = String, Path, description = "Postal code at the centre of the search"),
        ("distance" = f64, Path, description = "Radius in miles")
    ),
    responses(
        (status = 200, description = "Bootcamps inside the radius", body = ListResponse),
        (status = 400, description = "Invalid distance", body = ErrorDto),
        (status = 404, description = "Postal code not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bootcamps_in_radius(
    State(state): State<AppState>,
    Path((zipcode, distance)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let distance = parse_distance(&distance)?;

    let bootcamps = BootcampService::new(&state.db, state.geocoder.as_ref())
        .get_within_radius(&zipcode, distance)
        .await?;

    let dtos: Vec<BootcampDto> = bootcamps.into_iter().map(|b| b.into_dto(None)).collect();

    Ok((StatusCode::OK, Json(ListResponse::from_items(dtos)?)))
}

/// Upload a bootcamp photo.
///
/// Expects a multipart body with an image in the `file` field. The photo is stored as
/// `photo_<id><ext>` in the upload directory and its name returned as `data`.
///
/// # Access Control
/// - `Publisher` - Only their own bootcamp
/// - `Admin` - Any bootcamp
///
/// # Returns
/// - `200 OK` - Stored file name
/// - `400 Bad Request` - No file, not an image, or larger than the configured limit
/// - `500 Internal Server Error` - The file could not be written
#[utoipa::path(
    put,
    path = "/api/v1/bootcamps/{id}/photo",
    tag = BOOTCAMP_TAG,
    params(("id" = i32, Path, description = "Bootcamp ID")),
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field"),
    responses(
        (status = 200, description = "Photo stored", body = DataResponse<String>),
        (status = 400, description = "Missing, non-image or oversized file", body = ErrorDto),
        (status = 401, description = "User not authenticated or not the owner", body = ErrorDto),
        (status = 403, description = "User role not permitted", body = ErrorDto),
        (status = 404, description = "Bootcamp not found", body = ErrorDto),
        (status = 500, description = "Problem with file upload", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upload_bootcamp_photo(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &token)
        .require(&[Role::Publisher, Role::Admin])
        .await?;
    let id = parse_id(&id, "Bootcamp")?;

    // A body that is not multipart at all carries no file.
    let upload = match multipart {
        Ok(multipart) => read_photo(multipart).await?,
        Err(_) => None,
    };

    let file_name = BootcampService::new(&state.db, state.geocoder.as_ref())
        .upload_photo(id, &user, upload, &state.uploads)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(file_name))))
}

async fn read_photo(mut multipart: Multipart) -> Result<Option<PhotoUpload>, UploadError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        return Ok(Some(PhotoUpload {
            file_name,
            content_type,
            bytes,
        }));
    }

    Ok(None)
}
