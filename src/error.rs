//! Error types for the video store server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::{models::ValidationErrors, repository::StoreError};

/// Numeric error codes reported in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    StorageFailure = 1,
    NoSuchFilm = 2,
    FilmAlreadyExists = 3,
    BadValue = 4,
    UnknownReleaseTier = 5,
    InvalidRentalRequest = 6,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Unknown release tier {0:?}, expected one of new, regular, old")]
    UnknownReleaseTier(String),

    #[error("Film {0:?} was not found")]
    FilmNotFound(String),

    #[error("Film {0:?} already exists")]
    FilmAlreadyExists(String),

    #[error("Invalid rental request: {} errors encountered", .0.len())]
    InvalidRentalRequest(Vec<AppError>),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Individual failures carried by aggregate errors
    pub fn details(&self) -> Vec<String> {
        match self {
            AppError::Validation(errors) => {
                errors.issues().iter().map(ToString::to_string).collect()
            }
            AppError::InvalidRentalRequest(errors) => {
                errors.iter().map(ToString::to_string).collect()
            }
            _ => Vec::new(),
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(_) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::BadValue,
                "Film failed validation".to_string(),
            ),
            AppError::UnknownReleaseTier(_) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::UnknownReleaseTier,
                self.to_string(),
            ),
            AppError::FilmNotFound(_) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchFilm, self.to_string())
            }
            AppError::FilmAlreadyExists(_) => (
                StatusCode::CONFLICT,
                ErrorCode::FilmAlreadyExists,
                format!("{}. Name must be unique", self),
            ),
            AppError::InvalidRentalRequest(_) => (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidRentalRequest,
                "Submitted return cannot be processed".to_string(),
            ),
            AppError::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::StorageFailure,
                    "Storage error".to_string(),
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
            details: self.details(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
