//! 実データベースに対するHTTPフローの検証

use crate::support::{app_state, audit_count, create_user, fresh_pool};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chatview::api::create_router;
use serial_test::serial;
use tower::ServiceExt;

#[tokio::test]
#[ignore = "requires CHATVIEW_TEST_DATABASE_URL"]
#[serial]
async fn empty_chat_view_appends_one_audit_row() {
    let Some(pool) = fresh_pool().await else {
        return;
    };
    let app = create_router(app_state(&pool));

    let response = app
        .oneshot(Request::builder().uri("/chat/7").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let row: (String, Option<i32>, String, i32) =
        sqlx::query_as("SELECT action, user_id, target_type, target_id FROM audit_logs")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(
        row,
        ("view_messages".to_string(), None, "chat".to_string(), 7)
    );
}

#[tokio::test]
#[ignore = "requires CHATVIEW_TEST_DATABASE_URL"]
#[serial]
async fn post_then_read_records_both_actions_in_order() {
    let Some(pool) = fresh_pool().await else {
        return;
    };
    let sender = create_user(&pool, "Олена").await;
    let app = create_router(app_state(&pool));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/send")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(format!(
                    "sender_id={}&chat_id=1&content=hello",
                    sender
                )))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/chat/1");

    let response = app
        .oneshot(Request::builder().uri("/chat/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = String::from_utf8(body.to_vec()).unwrap();
    assert!(body.contains("hello"));
    assert!(body.contains("Олена"));

    let message_id: i32 = sqlx::query_scalar("SELECT id FROM messages")
        .fetch_one(&pool)
        .await
        .unwrap();
    let rows: Vec<(String, Option<i32>, String, i32)> = sqlx::query_as(
        "SELECT action, user_id, target_type, target_id FROM audit_logs ORDER BY created_at",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(
        rows,
        vec![
            (
                "add_message".to_string(),
                Some(sender),
                "message".to_string(),
                message_id
            ),
            ("view_messages".to_string(), None, "chat".to_string(), 1),
        ]
    );
}

#[tokio::test]
#[ignore = "requires CHATVIEW_TEST_DATABASE_URL"]
#[serial]
async fn malformed_post_writes_nothing() {
    let Some(pool) = fresh_pool().await else {
        return;
    };
    let app = create_router(app_state(&pool));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/send")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let messages: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(messages, 0);
    assert_eq!(audit_count(&pool).await, 0);
}
