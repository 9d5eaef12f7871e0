pub mod article_handler;
pub mod comment_handler;
pub mod topic_handler;

use axum::response::IntoResponse;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::app_error::AppError;

const ENDPOINTS_DOCUMENT: &str = include_str!("../../endpoints.json");

pub async fn api_description_handler() -> Result<impl IntoResponse, AppError> {
    let endpoints: serde_json::Value = serde_json::from_str(ENDPOINTS_DOCUMENT)
        .map_err(|e| AppError::Internal(format!("endpoints document: {}", e)))?;

    Ok(ResponseBuilder::success("endpointsJson", endpoints))
}
