use axum::http::StatusCode;
use sea_orm::DbErr;
use thiserror::Error;

pub const BODY_EMPTY_MESSAGE: &str = "Bad request - body cannot be empty";
pub const MISSING_KEYS_MESSAGE: &str = "Bad request - keys missing from POST request";
pub const INVALID_QUERY_MESSAGE: &str = "Invalid query";

/// Every failure a handler can surface.
///
/// All variants except `Store` and `Internal` are structured rejections: they
/// know their own status and message. Raw store errors are classified later by
/// the error middleware using the native error code they carry.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(&'static str),

    /// Sort field or direction outside the whitelist
    #[error("Invalid Input")]
    InvalidInput,

    #[error("{0}")]
    Validation(String),

    #[error("Key ({field})=({value}) is not present in table \"{table}\".")]
    ForeignKeyViolation {
        field: &'static str,
        value: String,
        table: &'static str,
    },

    /// Non-numeric or out-of-range identifier, a body field of the wrong type,
    /// or a vote increment that would leave the column's range
    #[error("Invalid query")]
    MalformedIdentifier,

    #[error("Invalid path")]
    InvalidPath,

    #[error("store error: {0}")]
    Store(#[from] DbErr),

    #[error("internal error: {0}")]
    Internal(String),
}

/// A failure that already carries its HTTP status and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn article_not_found() -> Self {
        AppError::NotFound("Article not found")
    }

    pub fn topic_not_found() -> Self {
        AppError::NotFound("Invalid Topic")
    }

    pub fn comment_not_found() -> Self {
        AppError::NotFound("Comment not found")
    }

    pub fn body_empty() -> Self {
        AppError::Validation(BODY_EMPTY_MESSAGE.to_string())
    }

    pub fn missing_keys() -> Self {
        AppError::Validation(MISSING_KEYS_MESSAGE.to_string())
    }

    pub fn rejection(&self) -> Option<Rejection> {
        let status = match self {
            AppError::NotFound(_) | AppError::ForeignKeyViolation { .. } | AppError::InvalidPath => {
                StatusCode::NOT_FOUND
            }
            AppError::InvalidInput | AppError::Validation(_) | AppError::MalformedIdentifier => {
                StatusCode::BAD_REQUEST
            }
            AppError::Store(_) | AppError::Internal(_) => return None,
        };

        Some(Rejection {
            status,
            message: self.to_string(),
        })
    }
}
