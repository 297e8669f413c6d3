use std::{path::PathBuf, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_JWT_EXPIRE_DAYS: i64 = 30;
const DEFAULT_JWT_COOKIE_EXPIRE_DAYS: i64 = 30;
const DEFAULT_MAX_FILE_UPLOAD: u64 = 1_000_000;
const DEFAULT_FILE_UPLOAD_PATH: &str = "./public/uploads";
const DEFAULT_GEOCODER_URL: &str = "https://www.mapquestapi.com/geocoding/v1/address";
const DEFAULT_APP_ENV: &str = "development";

pub struct Config {
    pub port: u16,
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_expire_days: i64,
    pub jwt_cookie_expire_days: i64,

    pub max_file_upload: u64,
    pub file_upload_path: PathBuf,

    pub geocoder_url: String,
    pub geocoder_api_key: String,

    pub app_env: String,
    pub app_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = optional("PORT", DEFAULT_PORT)?;

        Ok(Self {
            port,
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_expire_days: optional("JWT_EXPIRE", DEFAULT_JWT_EXPIRE_DAYS)?,
            jwt_cookie_expire_days: optional("JWT_COOKIE_EXPIRE", DEFAULT_JWT_COOKIE_EXPIRE_DAYS)?,
            max_file_upload: optional("MAX_FILE_UPLOAD", DEFAULT_MAX_FILE_UPLOAD)?,
            file_upload_path: std::env::var("FILE_UPLOAD_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_FILE_UPLOAD_PATH)),
            geocoder_url: std::env::var("GEOCODER_URL")
                .unwrap_or_else(|_| DEFAULT_GEOCODER_URL.to_string()),
            geocoder_api_key: required("GEOCODER_API_KEY")?,
            app_env: std::env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_APP_ENV.to_string()),
            app_url: std::env::var("APP_URL")
                .unwrap_or_else(|_| format!("http://localhost:{}", port)),
        })
    }

    /// Cookies are only marked `Secure` when running in production.
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
