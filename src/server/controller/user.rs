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
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthToken},
        model::{
            query::QueryParams,
            user::{AccountChanges, NewAccount, User},
        },
        service::user::UserService,
        state::AppState,
        util::{extract::ValidatedJson, parse::parse_id},
    },
};

/// Tag for grouping user management endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get users.
///
/// # Access Control
/// - `Admin` - Can view all users
///
/// # Returns
/// - `200 OK` - One page of users with `count` and `pagination`
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - User is not an admin
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = USER_TAG,
    params(
        ("select" = Option<String>, Query, description = "Comma separated fields to return"),
        ("sort" = Option<String>, Query, description = "Comma separated sort fields, `-` for descending (default: -createdAt)"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Records per page (default: 25)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved users", body = ListResponse),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    token: AuthToken,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &token).require(&[Role::Admin]).await?;
    let params = QueryParams::from_query(query.as_deref())?;

    let page = UserService::new(&state.db)
        .get_paginated(&params)
        .await?
        .map(User::into_dto);

    Ok((StatusCode::OK, Json(page.into_list_response(&params, &[])?)))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Successfully retrieved user", body = DataResponse<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &token).require(&[Role::Admin]).await?;
    let id = parse_id(&id, "User")?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(user.into_dto()))))
}

/// Create an account with any role.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = DataResponse<UserDto>),
        (status = 400, description = "Invalid user data or duplicate email", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_user(
    State(state): State<AppState>,
    token: AuthToken,
    ValidatedJson(payload): ValidatedJson<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &token).require(&[Role::Admin]).await?;

    let user = UserService::new(&state.db)
        .create(NewAccount::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(DataResponse::new(user.into_dto()))))
}

/// Update any account.
///
/// A supplied password is hashed before it is stored.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = DataResponse<UserDto>),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &token).require(&[Role::Admin]).await?;
    let id = parse_id(&id, "User")?;

    let user = UserService::new(&state.db)
        .update(id, AccountChanges::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(user.into_dto()))))
}

#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Successfully deleted user", body = DataResponse<EmptyDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state, &token).require(&[Role::Admin]).await?;
    let id = parse_id(&id, "User")?;

    UserService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(EmptyDto::default()))))
}
