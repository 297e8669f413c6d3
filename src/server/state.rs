//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. Every field is cheap to clone: the
//! connection pool, the geocoder behind an `Arc`, and keys held by the token service.

use std::{path::PathBuf, sync::Arc};

use sea_orm::DatabaseConnection;

use crate::server::service::{geocoder::Geocoder, token::TokenService};

/// Where uploaded photos go and how large they may be.
#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub dir: PathBuf,
    pub max_bytes: u64,
}

/// Attributes of the `token` cookie set on login.
#[derive(Debug, Clone, Copy)]
pub struct CookieSettings {
    pub max_age_days: i64,
    /// Set the `Secure` attribute; enabled in production.
    pub secure: bool,
}

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,

    /// Address and postal code resolver used by bootcamp create/update and radius search.
    pub geocoder: Arc<dyn Geocoder>,

    /// Signs and verifies bearer tokens.
    pub tokens: TokenService,

    pub uploads: UploadSettings,

    pub cookies: CookieSettings,

    /// Application base URL, used to build password reset links.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        geocoder: Arc<dyn Geocoder>,
        tokens: TokenService,
        uploads: UploadSettings,
        cookies: CookieSettings,
        app_url: String,
    ) -> Self {
        Self {
            db,
            geocoder,
            tokens,
            uploads,
            cookies,
            app_url,
        }
    }
}
