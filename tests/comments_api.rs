mod common;

use axum::http::{Method, StatusCode};
use common::{get, msg, send, test_app};
use news_api::services::comment_service::CommentService;
use news_api::utils::app_error::AppError;
use news_api::models::comment_model::CreateCommentRequest;
use serde_json::{json, Value};

#[tokio::test]
async fn lists_comments_for_article() {
    let (app, _db) = test_app().await;

    let (status, body) = get(&app, "/api/articles/1/comments").await;
    assert_eq!(status, StatusCode::OK);

    let comments = body["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 11);
    for comment in comments {
        assert!(comment["comment_id"].is_number());
        assert!(comment["votes"].is_number());
        assert!(comment["created_at"].is_string());
        assert!(comment["author"].is_string());
        assert!(comment["body"].is_string());
        assert_eq!(comment["article_id"], 1);
    }
    let ids: Vec<i64> = comments.iter().map(|c| c["comment_id"].as_i64().unwrap()).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn existing_article_without_comments_is_empty_list() {
    let (app, _db) = test_app().await;

    let (status, body) = get(&app, "/api/articles/2/comments").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["comments"], json!([]));
}

#[tokio::test]
async fn comments_for_missing_or_malformed_article() {
    let (app, _db) = test_app().await;

    let (status, body) = get(&app, "/api/articles/9999/comments").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "Article not found");

    let (status, body) = get(&app, "/api/articles/bad_id/comments").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), "Invalid query");
}

#[tokio::test]
async fn posts_a_comment() {
    let (app, _db) = test_app().await;

    let input = json!({ "author": "butter_bridge", "body": "dogs are better than cats" });
    let (status, body) = send(&app, Method::POST, "/api/articles/1/comments", Some(input)).await;
    assert_eq!(status, StatusCode::CREATED);

    let comment = body["comment"].as_object().unwrap();
    assert_eq!(comment.len(), 6);
    assert_eq!(comment["comment_id"], 19);
    assert_eq!(comment["author"], "butter_bridge");
    assert_eq!(comment["article_id"], 1);
    assert_eq!(comment["votes"], 0);
    assert!(comment["created_at"].is_string());
    assert_eq!(comment["body"], "dogs are better than cats");

    let (_, article) = get(&app, "/api/articles/1").await;
    assert_eq!(article["article"]["comment_count"], 12);
}

#[tokio::test]
async fn extra_keys_are_ignored() {
    let (app, _db) = test_app().await;

    let input = json!({ "author": "butter_bridge", "body": "please ignore this next property", "votes": 2000 });
    let (status, body) = send(&app, Method::POST, "/api/articles/1/comments", Some(input)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["comment"]["votes"], 0);
    assert!(body["comment"].get("extra").is_none());
}

#[tokio::test]
async fn empty_body_is_rejected_whatever_else_is_sent() {
    let (app, _db) = test_app().await;

    for input in [
        json!({ "author": "butter_bridge", "body": "" }),
        json!({ "body": "" }),
        json!({ "author": "nobody_at_all", "body": "" }),
    ] {
        let (status, body) = send(&app, Method::POST, "/api/articles/1/comments", Some(input)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg(&body), "Bad request - body cannot be empty");
    }
}

#[tokio::test]
async fn missing_keys_are_rejected() {
    let (app, _db) = test_app().await;

    for input in [
        json!({ "body": "testing for a post that does not include all keys" }),
        json!({ "author": "butter_bridge" }),
        json!({}),
    ] {
        let (status, body) = send(&app, Method::POST, "/api/articles/1/comments", Some(input)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg(&body), "Bad request - keys missing from POST request");
    }
}

#[tokio::test]
async fn unknown_references_name_the_key_and_value() {
    let (app, _db) = test_app().await;

    let input = json!({ "author": "butter_bridge", "body": "a valid id that does not exist" });
    let (status, body) = send(&app, Method::POST, "/api/articles/999/comments", Some(input)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "Key (article_id)=(999) is not present in table \"articles\".");

    let input = json!({ "author": "really_terrible_userName", "body": "testing for an invalid username" });
    let (status, body) = send(&app, Method::POST, "/api/articles/1/comments", Some(input)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        msg(&body),
        "Key (author)=(really_terrible_userName) is not present in table \"users\"."
    );
}

#[tokio::test]
async fn malformed_article_id_on_post() {
    let (app, _db) = test_app().await;

    let input = json!({ "author": "butter_bridge", "body": "testing for an invalid article_id" });
    let (status, body) = send(&app, Method::POST, "/api/articles/reallyBadId/comments", Some(input)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), "Invalid query");
}

#[tokio::test]
async fn service_checks_fields_before_references() {
    let (_app, db) = test_app().await;

    let err = CommentService::create_comment(&db, 9999, CreateCommentRequest::new("nobody", ""))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(ref m) if m == "Bad request - body cannot be empty"));

    let err = CommentService::create_comment(&db, 9999, CreateCommentRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(ref m) if m == "Bad request - keys missing from POST request"));
}

#[tokio::test]
async fn deletes_a_comment() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, Method::DELETE, "/api/comments/3", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, comments) = get(&app, "/api/articles/1/comments").await;
    let comments = comments["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 10);
    assert!(comments.iter().all(|c| c["comment_id"] != 3));
}

#[tokio::test]
async fn delete_failures() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, Method::DELETE, "/api/comments/badId", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), "Invalid query");

    let (status, body) = send(&app, Method::DELETE, "/api/comments/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "Comment not found");

    // Deleting twice: the second attempt finds nothing
    send(&app, Method::DELETE, "/api/comments/3", None).await;
    let (status, _) = send(&app, Method::DELETE, "/api/comments/3", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
