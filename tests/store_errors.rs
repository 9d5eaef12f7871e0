mod common;

use axum::http::StatusCode;
use common::test_app;
use news_api::middleware::error_middleware::normalize;
use news_api::repositories::comment_repository::CommentRepository;
use news_api::utils::app_error::{AppError, MISSING_KEYS_MESSAGE};
use news_api::utils::store_error_codes::{self, StoreErrorKind};
use sea_orm::{ConnectionTrait, DbErr};

fn expect_err<T: std::fmt::Debug>(result: Result<T, DbErr>) -> DbErr {
    match result {
        Ok(value) => panic!("expected a store error, got {value:?}"),
        Err(err) => err,
    }
}

#[tokio::test]
async fn driver_foreign_key_error_becomes_not_found() {
    let (_app, db) = test_app().await;

    // Skips the service pre-checks so the store itself refuses the row
    let err = expect_err(
        CommentRepository::create(&db, 9999, "butter_bridge".to_string(), "orphan".to_string()).await,
    );

    let native = store_error_codes::native_error(&err).unwrap();
    assert_eq!(native.code, "787");
    assert_eq!(
        store_error_codes::classify(&native.code).map(|(_, kind)| kind),
        Some(StoreErrorKind::ForeignKeyViolation)
    );

    assert_eq!(
        normalize(&AppError::Store(err)),
        (StatusCode::NOT_FOUND, "FOREIGN KEY constraint failed".to_string())
    );
}

#[tokio::test]
async fn driver_not_null_error_becomes_missing_keys() {
    let (_app, db) = test_app().await;

    let err = expect_err(
        db.execute_unprepared("INSERT INTO comments (author, article_id) VALUES ('butter_bridge', 1)")
            .await,
    );

    let native = store_error_codes::native_error(&err).unwrap();
    assert_eq!(native.code, "1299");

    assert_eq!(
        normalize(&AppError::Store(err)),
        (StatusCode::BAD_REQUEST, MISSING_KEYS_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn unclassified_driver_error_is_internal() {
    let (_app, db) = test_app().await;

    let err = expect_err(db.execute_unprepared("SELECT * FROM no_such_table").await);

    assert_eq!(
        normalize(&AppError::Store(err)),
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string())
    );
}
