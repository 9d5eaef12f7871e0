use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use crate::utils::app_error::AppError;

/// `Query` whose rejection (a repeated key, a value of the wrong type) is an
/// `AppError::InvalidInput` with a `{msg}` body.
pub struct ParsedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ParsedQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ParsedQuery(value)),
            Err(rejection) => {
                tracing::debug!("rejected query {:?}: {}", parts.uri.query(), rejection.body_text());
                Err(AppError::InvalidInput)
            }
        }
    }
}
