//! Existence checks used to tell "nothing there yet" apart from "no such thing".

use sea_orm::DatabaseConnection;
use crate::repositories::{article_repository::ArticleRepository, topic_repository::TopicRepository};
use crate::utils::app_error::AppError;

pub async fn article_exists(db: &DatabaseConnection, id: i32) -> Result<(), AppError> {
    ArticleRepository::find_by_id(db, id)
        .await?
        .map(|_| ())
        .ok_or_else(AppError::article_not_found)
}

pub async fn topic_exists(db: &DatabaseConnection, slug: &str) -> Result<(), AppError> {
    TopicRepository::find_by_slug(db, slug)
        .await?
        .map(|_| ())
        .ok_or_else(AppError::topic_not_found)
}
