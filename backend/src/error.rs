use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::model::system::KeyUploadResponse;
use serde_json::json;
use thiserror::Error;

/// Failures of the in-memory job store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("job not found: {0}")]
    NotFound(String),

    #[error("job id already in use: {0}")]
    DuplicateId(String),
}

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The uploaded key was rejected. Carries the client-facing message.
    #[error("{0}")]
    InvalidKey(&'static str),

    #[error("upload failed: {0}")]
    Upload(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::JobNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidKey(_) | ApiError::Upload(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            ApiError::InvalidKey(message) => response.json(KeyUploadResponse::error(message)),
            ApiError::Upload(reason) => {
                log::warn!("Key upload rejected: {}", reason);
                response.json(KeyUploadResponse::error(reason))
            }
            ApiError::Store(err) => {
                log::error!("Job store error: {}", err);
                response.json(json!({ "detail": "Internal server error" }))
            }
            ApiError::JobNotFound(_) => response.json(json!({ "detail": self.to_string() })),
        }
    }
}
