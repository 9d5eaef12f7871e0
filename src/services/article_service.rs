use sea_orm::DatabaseConnection;
use crate::entities::article;
use crate::models::article_model::*;
use crate::repositories::article_repository::ArticleRepository;
use crate::services::validation_service;
use crate::utils::app_error::AppError;

pub struct ArticleService;

impl ArticleService {
    pub async fn get_article(db: &DatabaseConnection, id: i32) -> Result<ArticleResponse, AppError> {
        ArticleRepository::find_with_comment_count(db, id)
            .await?
            .ok_or_else(AppError::article_not_found)
    }

    pub async fn update_votes(
        db: &DatabaseConnection,
        id: i32,
        delta: Option<i32>,
    ) -> Result<article::Model, AppError> {
        let matched = ArticleRepository::increment_votes(db, id, delta.unwrap_or(0)).await?;
        if matched == 0 {
            // Either no such article or the total would leave the column's range
            validation_service::article_exists(db, id).await?;
            return Err(AppError::MalformedIdentifier);
        }

        ArticleRepository::find_by_id(db, id)
            .await?
            .ok_or_else(AppError::article_not_found)
    }

    pub async fn list_articles(
        db: &DatabaseConnection,
        params: ArticleFilterParams,
    ) -> Result<Vec<ArticleSummary>, AppError> {
        // Whitelist first: nothing reaches the store until both parse
        let sort = match params.sort_by.as_deref() {
            Some(raw) => raw.parse::<SortField>()?,
            None => SortField::default(),
        };
        let order = match params.order.as_deref() {
            Some(raw) => raw.parse::<SortOrder>()?,
            None => SortOrder::default(),
        };

        // `?topic=` with no value lists everything
        let topic = params.topic.as_deref().filter(|slug| !slug.is_empty());
        if let Some(slug) = topic {
            validation_service::topic_exists(db, slug).await?;
        }

        tracing::debug!(?sort, ?order, ?topic, "listing articles");

        Ok(ArticleRepository::list_with_comment_count(db, sort.column(), order.order(), topic).await?)
    }
}
