use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UploadError {
    /// Multipart body had no `file` field.
    #[error("Please upload a file")]
    MissingFile,

    /// Uploaded part's content type does not start with `image`.
    #[error("Please upload an image file")]
    NotAnImage,

    /// Uploaded part exceeds the configured `MAX_FILE_UPLOAD` size.
    #[error("Please upload an image less than {max_bytes} bytes")]
    TooLarge { max_bytes: u64 },

    /// Multipart stream could not be parsed.
    #[error("Malformed upload: {0}")]
    Multipart(#[from] MultipartError),

    /// Writing the photo to the upload directory failed.
    #[error("Problem with file upload")]
    Write(#[source] std::io::Error),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match self {
            Self::Write(ref err) => {
                tracing::error!("Failed to store uploaded photo: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto::new(self.to_string())),
                )
                    .into_response()
            }
            err => (StatusCode::BAD_REQUEST, Json(ErrorDto::new(err.to_string()))).into_response(),
        }
    }
}
