use axum::{extract::State, response::IntoResponse};
use crate::config::AppState;
use crate::models::article_model::*;
use crate::services::article_service::ArticleService;
use crate::utils::api_response::ResponseBuilder;
use crate::utils::app_error::AppError;
use crate::utils::parsed_path::ParsedPath;
use crate::utils::parsed_query::ParsedQuery;
use crate::utils::validated_wrapper::ValidatedJson;

pub async fn list_articles_handler(
    State(state): State<AppState>,
    ParsedQuery(params): ParsedQuery<ArticleFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let articles = ArticleService::list_articles(&state.db, params).await?;
    Ok(ResponseBuilder::success("articles", articles))
}

pub async fn get_article_handler(
    State(state): State<AppState>,
    ParsedPath(article_id): ParsedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::get_article(&state.db, article_id).await?;
    Ok(ResponseBuilder::success("article", article))
}

pub async fn update_article_votes_handler(
    State(state): State<AppState>,
    ParsedPath(article_id): ParsedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateVotesRequest>,
) -> Result<impl IntoResponse, AppError> {
    let article = ArticleService::update_votes(&state.db, article_id, payload.inc_votes).await?;
    Ok(ResponseBuilder::success("article", article))
}
