use axum::{extract::State, response::IntoResponse};
use crate::config::AppState;
use crate::services::topic_service::TopicService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::app_error::AppError;

pub async fn list_topics_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let topics = TopicService::list_topics(&state.db).await?;
    Ok(ResponseBuilder::success("topics", topics))
}
