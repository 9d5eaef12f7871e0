use sea_orm::sea_query::Expr;
use sea_orm::*;
use crate::entities::{article, article::Entity as Article, comment};
use crate::models::article_model::{ArticleResponse, ArticleSummary};

pub struct ArticleRepository;

impl ArticleRepository {
    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<article::Model>, DbErr> {
        Article::find_by_id(id).one(db).await
    }

    pub async fn find_with_comment_count(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<ArticleResponse>, DbErr> {
        Self::with_comment_count()
            .column(article::Column::Body)
            .filter(article::Column::ArticleId.eq(id))
            .into_model::<ArticleResponse>()
            .one(db)
            .await
    }

    /// `sort` and `order` come from the whitelist enums, never from raw input.
    pub async fn list_with_comment_count(
        db: &DatabaseConnection,
        sort: article::Column,
        order: Order,
        topic: Option<&str>,
    ) -> Result<Vec<ArticleSummary>, DbErr> {
        let mut query = Self::with_comment_count();

        if let Some(slug) = topic {
            query = query.filter(article::Column::Topic.eq(slug));
        }

        query
            .order_by(sort, order)
            // Stable output for ties
            .order_by_asc(article::Column::ArticleId)
            .into_model::<ArticleSummary>()
            .all(db)
            .await
    }

    /// Single `UPDATE ... SET votes = votes + $1` so concurrent increments are
    /// serialized by the store. Returns the number of rows matched.
    ///
    /// A row whose new total would not fit the 32-bit column is not matched.
    /// The sum is computed as a 64-bit value so it cannot overflow itself.
    pub async fn increment_votes(db: &DatabaseConnection, id: i32, delta: i32) -> Result<u64, DbErr> {
        let new_votes = Expr::col(article::Column::Votes).add(i64::from(delta));

        let res = Article::update_many()
            .col_expr(article::Column::Votes, new_votes.clone())
            .filter(article::Column::ArticleId.eq(id))
            .filter(Expr::expr(new_votes).between(i64::from(i32::MIN), i64::from(i32::MAX)))
            .exec(db)
            .await?;

        Ok(res.rows_affected)
    }

    // SELECT articles.*, COUNT(comments.comment_id) AS comment_count
    // FROM articles LEFT JOIN comments ... GROUP BY articles.article_id
    fn with_comment_count() -> Select<article::Entity> {
        Article::find()
            .select_only()
            .columns([
                article::Column::ArticleId,
                article::Column::Title,
                article::Column::Votes,
                article::Column::Topic,
                article::Column::Author,
                article::Column::CreatedAt,
            ])
            .column_as(
                Expr::col((comment::Entity, comment::Column::CommentId)).count(),
                "comment_count",
            )
            .join(JoinType::LeftJoin, article::Relation::Comment.def())
            .group_by(article::Column::ArticleId)
    }
}
