use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{ser::SerializeMap, Serialize, Serializer};

/// Wraps a payload under a single named field, e.g. `{"articles": [...]}`.
pub struct Envelope<T> {
    pub key: &'static str,
    pub data: T,
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, &self.data)?;
        map.end()
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub msg: String,
}

// Wrapper to combine StatusCode and the Body
pub struct ApiResponseResult<T>(pub StatusCode, pub T);

impl<T> IntoResponse for ApiResponseResult<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}

pub struct ResponseBuilder;

impl ResponseBuilder {
    pub fn success<T: Serialize>(key: &'static str, data: T) -> ApiResponseResult<Envelope<T>> {
        ApiResponseResult(StatusCode::OK, Envelope { key, data })
    }

    pub fn created<T: Serialize>(key: &'static str, data: T) -> ApiResponseResult<Envelope<T>> {
        ApiResponseResult(StatusCode::CREATED, Envelope { key, data })
    }

    pub fn no_content() -> StatusCode {
        StatusCode::NO_CONTENT
    }

    pub fn error(status_code: StatusCode, message: &str) -> ApiResponseResult<ErrorBody> {
        ApiResponseResult(
            status_code,
            ErrorBody {
                msg: message.to_string(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_nests_payload_under_key() {
        let body = serde_json::to_value(Envelope {
            key: "topics",
            data: vec!["mitch", "cats"],
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "topics": ["mitch", "cats"] }));
    }

    #[test]
    fn error_body_only_carries_msg() {
        let ApiResponseResult(status, body) = ResponseBuilder::error(StatusCode::NOT_FOUND, "Invalid path");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            serde_json::json!({ "msg": "Invalid path" })
        );
    }
}
