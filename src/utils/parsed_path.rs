use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use crate::utils::app_error::AppError;

/// `Path` that turns an unparsable segment (e.g. `/api/articles/bad_id`)
/// into `AppError::MalformedIdentifier` instead of axum's plain-text 400.
pub struct ParsedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ParsedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ParsedPath(value)),
            Err(rejection) => {
                tracing::debug!("rejected path {}: {}", parts.uri.path(), rejection.body_text());
                Err(AppError::MalformedIdentifier)
            }
        }
    }
}
