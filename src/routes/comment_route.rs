use axum::{routing::delete, Router};
use crate::config::AppState;
use crate::handlers::comment_handler::delete_comment_handler;

pub fn comment_routes() -> Router<AppState> {
    Router::new().route("/{comment_id}", delete(delete_comment_handler))
}
