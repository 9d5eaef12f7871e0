use sea_orm::*;
use chrono::Utc;
use crate::entities::{comment, comment::Entity as Comment};

pub struct CommentRepository;

impl CommentRepository {
    pub async fn find_by_article(db: &DatabaseConnection, article_id: i32) -> Result<Vec<comment::Model>, DbErr> {
        Comment::find()
            .filter(comment::Column::ArticleId.eq(article_id))
            .order_by_asc(comment::Column::CommentId)
            .all(db)
            .await
    }

    pub async fn create(
        db: &DatabaseConnection,
        article_id: i32,
        author: String,
        body: String,
    ) -> Result<comment::Model, DbErr> {
        let new_comment = comment::ActiveModel {
            comment_id: NotSet,
            author: Set(author),
            article_id: Set(article_id),
            votes: Set(0),
            created_at: Set(Utc::now()),
            body: Set(body),
        };

        new_comment.insert(db).await
    }

    /// Returns the number of rows removed.
    pub async fn delete(db: &DatabaseConnection, comment_id: i32) -> Result<u64, DbErr> {
        let res = Comment::delete_by_id(comment_id).exec(db).await?;
        Ok(res.rows_affected)
    }
}
