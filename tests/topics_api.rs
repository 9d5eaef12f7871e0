mod common;

use axum::http::StatusCode;
use common::{get, msg, test_app};

#[tokio::test]
async fn lists_every_topic_with_slug_and_description() {
    let (app, _db) = test_app().await;

    let (status, body) = get(&app, "/api/topics").await;
    assert_eq!(status, StatusCode::OK);

    let topics = body["topics"].as_array().unwrap();
    assert_eq!(topics.len(), 3);
    for topic in topics {
        assert!(topic["slug"].is_string());
        assert!(topic["description"].is_string());
    }
    assert_eq!(topics[0]["slug"], "mitch");
}

#[tokio::test]
async fn unknown_path_is_invalid_path() {
    let (app, _db) = test_app().await;

    let (status, body) = get(&app, "/api/wrongPath").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "Invalid path");
}

#[tokio::test]
async fn api_root_describes_every_endpoint() {
    let (app, _db) = test_app().await;

    let (status, body) = get(&app, "/api").await;
    assert_eq!(status, StatusCode::OK);

    let endpoints = body["endpointsJson"].as_object().unwrap();
    for route in [
        "GET /api/topics",
        "GET /api/articles",
        "GET /api/articles/:article_id",
        "PATCH /api/articles/:article_id",
        "GET /api/articles/:article_id/comments",
        "POST /api/articles/:article_id/comments",
        "DELETE /api/comments/:comment_id",
    ] {
        assert!(endpoints.contains_key(route), "missing {route}");
    }
}
