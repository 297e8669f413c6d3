use thiserror::Error;

/// Failures while reading the server configuration from the environment.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable with no default (`DATABASE_URL`, `JWT_SECRET`, ...) is unset.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A numeric setting such as `PORT` or `MAX_FILE_UPLOAD` failed to parse.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },
}
