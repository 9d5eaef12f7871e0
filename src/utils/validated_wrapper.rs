use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    Json,
};
use validator::{Validate, ValidationErrors};
use crate::utils::app_error::AppError;

/// JSON body that is deserialized and then checked with `validator`.
///
/// A request with no body at all is read as `T::default()`, the same as `{}`.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: serde::de::DeserializeOwned + Validate + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // 1. JSON Extraction
        let bytes = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::debug!("unreadable body: {}", err.body_text());
            AppError::MalformedIdentifier
        })?;

        let payload = if bytes.iter().all(u8::is_ascii_whitespace) {
            T::default()
        } else {
            let Json(payload) = Json::<T>::from_bytes(&bytes).map_err(|err| {
                tracing::debug!("rejected JSON body: {}", err.body_text());
                AppError::MalformedIdentifier
            })?;
            payload
        };

        // 2. Logic Validation
        if let Err(e) = payload.validate() {
            return Err(AppError::Validation(first_validation_message(e)));
        }

        Ok(ValidatedJson(payload))
    }
}

// Field order is not stable in `ValidationErrors`, so pick by field name
fn first_validation_message(errors: ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(_, kinds)| kinds.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Validation failed".to_string())
}
