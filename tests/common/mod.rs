#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use news_api::config::AppState;
use news_api::{database, seeders};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde_json::Value;
use tower::ServiceExt;

/// Router over a fresh in-memory SQLite database, migrated and seeded.
pub async fn test_app() -> (Router, DatabaseConnection) {
    // One pooled connection: every in-memory connection is its own database
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .unwrap_or_else(|err| panic!("failed to open sqlite: {err}"));
    database::migrate(&db)
        .await
        .unwrap_or_else(|err| panic!("failed to migrate: {err}"));
    seeders::seed_fixture(&db)
        .await
        .unwrap_or_else(|err| panic!("failed to seed: {err}"));

    (news_api::app(AppState { db: db.clone() }), db)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap_or_else(|err| panic!("failed to build request: {err}"));

    let response = match app.clone().oneshot(request).await {
        Ok(response) => response,
        Err(err) => panic!("router request failed: {err}"),
    };
    let status = response.status();

    let bytes = match to_bytes(response.into_body(), 1024 * 1024).await {
        Ok(bytes) => bytes,
        Err(err) => panic!("failed to read response body: {err}"),
    };
    if bytes.is_empty() {
        return (status, Value::Null);
    }
    match serde_json::from_slice(&bytes) {
        Ok(value) => (status, value),
        Err(err) => panic!("response body is not JSON: {err}; body={bytes:?}"),
    }
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub fn msg(body: &Value) -> &str {
    body["msg"].as_str().unwrap_or_default()
}
