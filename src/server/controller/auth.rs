use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::{
    model::{
        api::{DataResponse, EmptyDto, ErrorDto},
        auth::{
            ForgotPasswordDto, LoginDto, RegisterDto, ResetPasswordDto, TokenResponse,
            UpdateDetailsDto, UpdatePasswordDto,
        },
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthToken, TOKEN_COOKIE},
        model::user::NewAccount,
        service::auth::AuthService,
        state::AppState,
        util::extract::ValidatedJson,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Value the cookie is overwritten with on logout.
const LOGGED_OUT_COOKIE: &str = "none";

/// Register an account.
///
/// Anyone may register as `user` (the default) or `publisher`.
///
/// # Returns
/// - `200 OK` - Bearer token in the body and the `token` cookie
/// - `400 Bad Request` - Validation failure, admin role requested, or duplicate email
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Account registered", body = TokenResponse),
        (status = 400, description = "Invalid registration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = NewAccount {
        name: payload.name,
        email: payload.email,
        password: payload.password,
        role: payload.role.unwrap_or_default(),
    };

    let (_, token) = AuthService::new(&state.db, &state.tokens)
        .register(account)
        .await?;

    Ok(token_response(&state, token))
}

/// Log in with email and password.
///
/// An unknown email and a wrong password are indistinguishable to the caller.
///
/// # Returns
/// - `200 OK` - Bearer token in the body and the `token` cookie
/// - `400 Bad Request` - Email or password missing
/// - `401 Unauthorized` - Invalid credentials
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenResponse),
        (status = 400, description = "Email or password missing", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (user, token) = AuthService::new(&state.db, &state.tokens)
        .login(&payload.email, &payload.password)
        .await?;

    tracing::debug!("User {} logged in", user.id);

    Ok(token_response(&state, token))
}

/// Get the authenticated user.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The authenticated user", body = DataResponse<UserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_me(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &token).require(&[]).await?;

    Ok((StatusCode::OK, Json(DataResponse::new(user.into_dto()))))
}

/// Log out by overwriting the `token` cookie with a short-lived placeholder.
#[utoipa::path(
    get,
    path = "/api/v1/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Cookie cleared", body = DataResponse<EmptyDto>)
    ),
)]
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let cookie = Cookie::build((TOKEN_COOKIE, LOGGED_OUT_COOKIE))
        .path("/")
        .http_only(true)
        .secure(state.cookies.secure)
        .max_age(time::Duration::seconds(10));

    (
        StatusCode::OK,
        jar.add(cookie),
        Json(DataResponse::new(EmptyDto::default())),
    )
}

/// Update the authenticated user's name and email.
#[utoipa::path(
    put,
    path = "/api/v1/auth/updatedetails",
    tag = AUTH_TAG,
    request_body = UpdateDetailsDto,
    responses(
        (status = 200, description = "Details updated", body = DataResponse<UserDto>),
        (status = 400, description = "Invalid details or duplicate email", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_details(
    State(state): State<AppState>,
    token: AuthToken,
    ValidatedJson(payload): ValidatedJson<UpdateDetailsDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &token).require(&[]).await?;

    let user = AuthService::new(&state.db, &state.tokens)
        .update_details(&user, payload.name, payload.email)
        .await?;

    Ok((StatusCode::OK, Json(DataResponse::new(user.into_dto()))))
}

/// Change the authenticated user's password.
///
/// # Returns
/// - `200 OK` - A fresh token
/// - `401 Unauthorized` - Not authenticated, or the current password is wrong
#[utoipa::path(
    put,
    path = "/api/v1/auth/updatepassword",
    tag = AUTH_TAG,
    request_body = UpdatePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = TokenResponse),
        (status = 400, description = "New password too short", body = ErrorDto),
        (status = 401, description = "Not authenticated or password is incorrect", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_password(
    State(state): State<AppState>,
    token: AuthToken,
    ValidatedJson(payload): ValidatedJson<UpdatePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state, &token).require(&[]).await?;

    let (_, token) = AuthService::new(&state.db, &state.tokens)
        .update_password(&user, &payload.current_password, &payload.new_password)
        .await?;

    Ok(token_response(&state, token))
}

/// Start a password reset.
///
/// Mail delivery is not part of this service; the reset link is written to the log.
///
/// # Returns
/// - `200 OK` - Reset token stored
/// - `404 Not Found` - No account with that email
#[utoipa::path(
    post,
    path = "/api/v1/auth/forgotpassword",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset token issued", body = DataResponse<String>),
        (status = 404, description = "No account with that email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let reset_token = AuthService::new(&state.db, &state.tokens)
        .forgot_password(&payload.email)
        .await?;

    tracing::info!(
        "Password reset requested for {}: {}/api/v1/auth/resetpassword/{}",
        payload.email,
        state.app_url.trim_end_matches('/'),
        reset_token
    );

    Ok((
        StatusCode::OK,
        Json(DataResponse::new("Reset token issued".to_string())),
    ))
}

/// Set a new password using a reset token.
///
/// # Returns
/// - `200 OK` - A fresh token
/// - `400 Bad Request` - Token unknown or expired
#[utoipa::path(
    put,
    path = "/api/v1/auth/resetpassword/{resettoken}",
    tag = AUTH_TAG,
    params(("resettoken" = String, Path, description = "Token from the reset link")),
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password reset", body = TokenResponse),
        (status = 400, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Path(reset_token): Path<String>,
    ValidatedJson(payload): ValidatedJson<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let (_, token) = AuthService::new(&state.db, &state.tokens)
        .reset_password(&reset_token, &payload.password)
        .await?;

    Ok(token_response(&state, token))
}

/// Body and cookie shared by every endpoint that hands out a token.
fn token_response(state: &AppState, token: String) -> impl IntoResponse {
    let cookie = Cookie::build((TOKEN_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .secure(state.cookies.secure)
        .max_age(time::Duration::days(state.cookies.max_age_days));

    (
        StatusCode::OK,
        CookieJar::new().add(cookie),
        Json(TokenResponse {
            success: true,
            token,
        }),
    )
}
