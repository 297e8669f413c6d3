mod model;
mod server;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::AppError,
    router,
    service::{geocoder::MapQuestGeocoder, token::TokenService},
    startup,
    state::{AppState, CookieSettings, UploadSettings},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    startup::prepare_upload_dir(&config).await?;

    let geocoder = Arc::new(MapQuestGeocoder::new(
        http_client,
        config.geocoder_url.clone(),
        config.geocoder_api_key.clone(),
    ));
    let tokens = TokenService::new(
        &config.jwt_secret,
        chrono::Duration::days(config.jwt_expire_days),
    );

    let state = AppState::new(
        db,
        geocoder,
        tokens,
        UploadSettings {
            dir: config.file_upload_path.clone(),
            max_bytes: config.max_file_upload,
        },
        CookieSettings {
            max_age_days: config.jwt_cookie_expire_days,
            secure: config.is_production(),
        },
        config.app_url.clone(),
    );

    let address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&address).await?;

    tracing::info!("Server running in {} mode on {}", config.app_env, address);

    axum::serve(listener, router::router(state))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
