use axum::{routing::get, Router};
use crate::config::AppState;
use crate::handlers::topic_handler::list_topics_handler;

pub fn topic_routes() -> Router<AppState> {
    Router::new().route("/", get(list_topics_handler))
}
