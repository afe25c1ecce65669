//! Error types for the library server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Stable error codes reported in JSON error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    DbFailure = 3,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    BadValue = 18,
    NoSuchData = 20,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid Book ID. Please enter a valid Book ID.")]
    InvalidBookId,

    #[error("Invalid Borrower ID. Please enter a valid Borrower ID.")]
    InvalidBorrowerId,

    #[error("Book {0} is already borrowed. Please choose another book.")]
    BookUnavailable(i64),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message shown back to the user on the submitting form, if this error
    /// is one the borrowing pages report inline.
    pub fn form_message(&self) -> Option<String> {
        match self {
            AppError::InvalidBookId | AppError::InvalidBorrowerId | AppError::BookUnavailable(_) => {
                Some(self.to_string())
            }
            _ => None,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidBookId | AppError::InvalidBorrowerId | AppError::NotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::BookUnavailable(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidBookId => ErrorCode::NoSuchItem,
            AppError::InvalidBorrowerId | AppError::NotFound(_) => ErrorCode::NoSuchData,
            AppError::BookUnavailable(_) => ErrorCode::ItemNotAvailable,
            AppError::BadRequest(_) => ErrorCode::BadValue,
            AppError::Database(_) => ErrorCode::DbFailure,
            AppError::Internal(_) => ErrorCode::Failure,
        }
    }

    /// User-facing message; server-side failures are logged and masked.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "Database error".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Internal server error".to_string()
            }
            AppError::NotFound(msg) | AppError::BadRequest(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message: self.public_message(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
