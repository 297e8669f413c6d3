//! Shared fixtures for unit and HTTP tests.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::server::{
    error::AppError,
    model::{geo::GeoLocation, user::User},
    router,
    service::{geocoder::Geocoder, token::TokenService},
    state::{AppState, CookieSettings, UploadSettings},
};

pub const TEST_SECRET: &str = "test-secret";
pub const TEST_MAX_UPLOAD: u64 = 1024;

const BOUNDARY: &str = "devcamper-test-boundary";

/// Geocoder answering from a fixed table of queries.
#[derive(Default)]
pub struct StaticGeocoder {
    locations: HashMap<String, GeoLocation>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, query: &str, location: GeoLocation) -> Self {
        self.locations.insert(query.to_string(), location);
        self
    }
}

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn geocode(&self, query: &str) -> Result<Option<GeoLocation>, AppError> {
        Ok(self.locations.get(query).cloned())
    }
}

pub fn location(latitude: f64, longitude: f64, city: &str, zipcode: &str) -> GeoLocation {
    GeoLocation {
        latitude,
        longitude,
        formatted_address: Some(format!("{}, {}", city, zipcode)),
        street: None,
        city: Some(city.to_string()),
        state: None,
        zipcode: Some(zipcode.to_string()),
        country: Some("US".to_string()),
    }
}

pub fn token_service() -> TokenService {
    TokenService::new(TEST_SECRET, chrono::Duration::days(30))
}

pub fn token_for(user: &entity::user::Model) -> String {
    token_service()
        .issue(&User::from_entity(user.clone()))
        .unwrap()
}

/// Application state and router over a test database.
///
/// Uploads go to a temporary directory removed when the app is dropped.
pub struct TestApp {
    pub state: AppState,
    pub router: Router,
    pub uploads: TempDir,
}

impl TestApp {
    pub fn new(db: &DatabaseConnection, geocoder: StaticGeocoder) -> Self {
        let uploads = tempfile::tempdir().unwrap();
        let state = AppState::new(
            db.clone(),
            Arc::new(geocoder),
            token_service(),
            UploadSettings {
                dir: uploads.path().to_path_buf(),
                max_bytes: TEST_MAX_UPLOAD,
            },
            CookieSettings {
                max_age_days: 30,
                secure: false,
            },
            "http://localhost:5000".to_string(),
        );
        let router = router::router(state.clone());

        Self {
            state,
            router,
            uploads,
        }
    }

    /// Sends a JSON request and decodes the JSON response.
    pub async fn json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let (status, _, body) = self.send(request).await;
        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.json(Method::GET, uri, None, None).await
    }

    /// Sends a multipart request with a single file part.
    pub async fn upload(
        &self,
        uri: &str,
        token: &str,
        field: &str,
        file_name: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> (StatusCode, Value) {
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::builder()
            .method(Method::PUT)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap();

        let (status, _, body) = self.send(request).await;
        (status, body)
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, headers, body)
    }
}
