use sea_orm::DatabaseConnection;
use crate::entities::comment;
use crate::models::comment_model::CreateCommentRequest;
use crate::repositories::{
    article_repository::ArticleRepository, comment_repository::CommentRepository,
    user_repository::UserRepository,
};
use crate::services::validation_service;
use crate::utils::app_error::AppError;

pub struct CommentService;

impl CommentService {
    pub async fn list_for_article(
        db: &DatabaseConnection,
        article_id: i32,
    ) -> Result<Vec<comment::Model>, AppError> {
        // An article with no comments is an empty list, a missing article is a 404
        validation_service::article_exists(db, article_id).await?;

        Ok(CommentRepository::find_by_article(db, article_id).await?)
    }

    pub async fn create_comment(
        db: &DatabaseConnection,
        article_id: i32,
        payload: CreateCommentRequest,
    ) -> Result<comment::Model, AppError> {
        // 1. Required fields; an empty body wins over anything else
        if payload.body.as_deref() == Some("") {
            return Err(AppError::body_empty());
        }
        let (Some(author), Some(body)) = (payload.author, payload.body) else {
            return Err(AppError::missing_keys());
        };

        // 2. References
        if ArticleRepository::find_by_id(db, article_id).await?.is_none() {
            return Err(AppError::ForeignKeyViolation {
                field: "article_id",
                value: article_id.to_string(),
                table: "articles",
            });
        }
        if UserRepository::find_by_username(db, &author).await?.is_none() {
            return Err(AppError::ForeignKeyViolation {
                field: "author",
                value: author,
                table: "users",
            });
        }

        // 3. Insert; a reference deleted in between surfaces as a raw FK error
        let saved = CommentRepository::create(db, article_id, author, body).await?;
        tracing::info!(comment_id = saved.comment_id, article_id, "comment created");

        Ok(saved)
    }

    pub async fn delete_comment(db: &DatabaseConnection, comment_id: i32) -> Result<(), AppError> {
        let removed = CommentRepository::delete(db, comment_id).await?;
        if removed == 0 {
            return Err(AppError::comment_not_found());
        }

        tracing::info!(comment_id, "comment deleted");
        Ok(())
    }
}
