use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pdf_compress::CompressError;
use pdf_images::ImagesError;
use serde::Serialize;
use thiserror::Error;

/// Errors a handler can return. Each maps onto one HTTP status.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Failed to read multipart field: {0}")]
    Multipart(#[from] MultipartError),
    #[error(transparent)]
    Images(#[from] ImagesError),
    #[error(transparent)]
    Compress(#[from] CompressError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Multipart(e) => e.status(),
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Images(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Compress(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Images(_) | ApiError::Compress(_) | ApiError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Body of every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("Request failed: {}", self);
        } else {
            log::debug!("Request rejected ({}): {}", status.as_u16(), self);
        }

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
