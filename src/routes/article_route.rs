use axum::{routing::get, Router};
use crate::config::AppState;
use crate::handlers::article_handler::*;
use crate::handlers::comment_handler::{create_comment_handler, list_comments_handler};

pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_articles_handler))
        .route("/{article_id}", get(get_article_handler).patch(update_article_votes_handler))
        .route("/{article_id}/comments", get(list_comments_handler).post(create_comment_handler))
}
