use crate::config::AppState;
use crate::handlers::api_description_handler;
use crate::middleware::error_middleware::invalid_path_handler;
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod article_route;
pub mod comment_route;
pub mod topic_route;

pub fn create_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api", get(api_description_handler))
        .nest("/api/topics", topic_route::topic_routes())
        .nest("/api/articles", article_route::article_routes())
        .nest("/api/comments", comment_route::comment_routes())
        .fallback(invalid_path_handler)
        // A known path with an undeclared verb is just another unmatched route.
        // Must come after every route is registered
        .method_not_allowed_fallback(invalid_path_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
