use axum::{extract::State, response::IntoResponse};
use crate::config::AppState;
use crate::models::comment_model::CreateCommentRequest;
use crate::services::comment_service::CommentService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::app_error::AppError;
use crate::utils::parsed_path::ParsedPath;
use crate::utils::validated_wrapper::ValidatedJson;

pub async fn list_comments_handler(
    State(state): State<AppState>,
    ParsedPath(article_id): ParsedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::list_for_article(&state.db, article_id).await?;
    Ok(ResponseBuilder::success("comments", comments))
}

pub async fn create_comment_handler(
    State(state): State<AppState>,
    ParsedPath(article_id): ParsedPath<i32>,
    ValidatedJson(payload): ValidatedJson<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::create_comment(&state.db, article_id, payload).await?;
    Ok(ResponseBuilder::created("comment", comment))
}

pub async fn delete_comment_handler(
    State(state): State<AppState>,
    ParsedPath(comment_id): ParsedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    CommentService::delete_comment(&state.db, comment_id).await?;
    Ok(ResponseBuilder::no_content())
}
