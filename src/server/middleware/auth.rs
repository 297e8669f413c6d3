use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::CookieJar;
use entity::user::Role;
use sea_orm::DatabaseConnection;
use std::convert::Infallible;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::User,
    service::token::TokenService,
    state::AppState,
};

/// Name of the cookie mirroring the bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// Bearer token presented with a request, if any.
///
/// Taken from `Authorization: Bearer <token>`, falling back to the `token` cookie.
/// Extraction never fails; `AuthGuard` decides whether a missing token is an error.
#[derive(Debug, Clone, Default)]
pub struct AuthToken(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for AuthToken {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let from_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());

        let token = from_header.or_else(|| {
            CookieJar::from_headers(&parts.headers)
                .get(TOKEN_COOKIE)
                .map(|cookie| cookie.value().to_string())
                .filter(|token| !token.is_empty() && token != "none")
        });

        Ok(Self(token))
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    token: &'a AuthToken,
}

impl<'a> AuthGuard<'a> {
    pub fn new(state: &'a AppState, token: &'a AuthToken) -> Self {
        Self {
            db: &state.db,
            tokens: &state.tokens,
            token,
        }
    }

    /// Resolves the request's user and checks its role.
    ///
    /// # Arguments
    /// - `roles` - Roles allowed on the route; empty allows any authenticated user
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken | InvalidToken | UserNotInDatabase)` - 401
    /// - `Err(AuthError::RoleNotPermitted)` - 403
    pub async fn require(&self, roles: &[Role]) -> Result<User, AppError> {
        let Some(token) = self.token.0.as_deref() else {
            return Err(AuthError::MissingToken.into());
        };

        let claims = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.id).await? else {
            return Err(AuthError::UserNotInDatabase(claims.id).into());
        };

        if !roles.is_empty() && !roles.contains(&user.role) {
            return Err(AuthError::RoleNotPermitted(user.role).into());
        }

        Ok(user)
    }
}
