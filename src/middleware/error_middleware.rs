use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use crate::utils::api_response::ResponseBuilder;
use crate::utils::app_error::{AppError, INVALID_QUERY_MESSAGE, MISSING_KEYS_MESSAGE};
use crate::utils::store_error_codes::{self, StoreErrorKind};

/// Turns any handler failure into a status and a `{msg}` body.
///
/// Structured rejections answer for themselves. Raw store errors are matched
/// on their native code; anything left over is a 500 with no details.
pub fn normalize(err: &AppError) -> (StatusCode, String) {
    if let Some(rejection) = err.rejection() {
        return (rejection.status, rejection.message);
    }

    if let AppError::Store(db_err) = err {
        if let Some(native) = store_error_codes::native_error(db_err) {
            if let Some((dialect, kind)) = store_error_codes::classify(&native.code) {
                tracing::debug!(dialect = dialect.name, code = %native.code, ?kind, "classified store error");

                return match kind {
                    StoreErrorKind::InvalidTextRepresentation => {
                        (StatusCode::BAD_REQUEST, INVALID_QUERY_MESSAGE.to_string())
                    }
                    StoreErrorKind::ForeignKeyViolation => {
                        (StatusCode::NOT_FOUND, native.detail.unwrap_or(native.message))
                    }
                    StoreErrorKind::NotNullViolation => {
                        (StatusCode::BAD_REQUEST, MISSING_KEYS_MESSAGE.to_string())
                    }
                };
            }
        }
    }

    tracing::error!("unhandled error: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = normalize(&self);
        ResponseBuilder::error(status, &message).into_response()
    }
}

pub async fn invalid_path_handler() -> AppError {
    AppError::InvalidPath
}
