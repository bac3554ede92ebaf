//! PgPool上のChatStore実装の検証

use crate::support::{audit_count, create_user, fresh_pool};
use chatview::audit::types::{AuditAction, NewAuditEntry, TargetKind, GUEST_DISPLAY_NAME};
use chatview::common::error::ChatError;
use chatview::common::types::NewMessage;
use chatview::db::traits::ChatStore;
use serial_test::serial;

#[tokio::test]
#[ignore = "requires CHATVIEW_TEST_DATABASE_URL"]
#[serial]
async fn insert_message_populates_full_text_search() {
    let Some(pool) = fresh_pool().await else {
        return;
    };
    let sender = create_user(&pool, "alice").await;

    let id = pool
        .insert_message(&NewMessage {
            sender_id: sender,
            chat_id: 1,
            content: "Hello Search World".to_string(),
        })
        .await
        .unwrap();

    let matches: bool = sqlx::query_scalar(
        "SELECT full_text_search @@ to_tsquery('simple', 'search') FROM messages WHERE id = $1",
    )
    .bind(id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert!(matches);
}

#[tokio::test]
#[ignore = "requires CHATVIEW_TEST_DATABASE_URL"]
#[serial]
async fn list_messages_returns_only_the_chat_in_order() {
    let Some(pool) = fresh_pool().await else {
        return;
    };
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;

    for (sender, chat_id, content) in [(alice, 1, "first"), (bob, 2, "elsewhere"), (bob, 1, "second")] {
        pool.insert_message(&NewMessage {
            sender_id: sender,
            chat_id,
            content: content.to_string(),
        })
        .await
        .unwrap();
    }

    let messages = pool.list_messages_by_chat(1).await.unwrap();
    let rendered: Vec<(&str, &str)> = messages
        .iter()
        .map(|m| (m.sender.as_str(), m.content.as_str()))
        .collect();
    assert_eq!(rendered, vec![("alice", "first"), ("bob", "second")]);
    assert!(messages[0].sent_at <= messages[1].sent_at);

    assert!(pool.list_messages_by_chat(42).await.unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires CHATVIEW_TEST_DATABASE_URL"]
#[serial]
async fn insert_message_with_unknown_sender_fails() {
    let Some(pool) = fresh_pool().await else {
        return;
    };

    let err = pool
        .insert_message(&NewMessage {
            sender_id: 0,
            chat_id: 1,
            content: "orphan".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ChatError::StorageUnavailable(_)));
}

#[tokio::test]
#[ignore = "requires CHATVIEW_TEST_DATABASE_URL"]
#[serial]
async fn recent_audit_entries_are_capped_newest_first() {
    let Some(pool) = fresh_pool().await else {
        return;
    };
    let alice = create_user(&pool, "alice").await;

    sqlx::query(
        "INSERT INTO audit_logs (action, user_id, target_type, target_id, created_at)
         SELECT 'view_messages', CASE WHEN g % 2 = 0 THEN NULL ELSE $1 END, 'chat', g,
                TIMESTAMP '2024-01-01 00:00:00' + g * INTERVAL '1 minute'
         FROM generate_series(0, 119) AS g",
    )
    .bind(alice)
    .execute(&pool)
    .await
    .unwrap();

    let entries = pool.list_recent_audit_entries(50).await.unwrap();
    assert_eq!(entries.len(), 50);
    assert_eq!(entries[0].target_id, 119);
    assert_eq!(entries[49].target_id, 70);
    assert!(entries
        .windows(2)
        .all(|pair| pair[0].created_at > pair[1].created_at));

    assert_eq!(entries[0].username, "alice");
    assert_eq!(entries[1].username, GUEST_DISPLAY_NAME);
}

#[tokio::test]
#[ignore = "requires CHATVIEW_TEST_DATABASE_URL"]
#[serial]
async fn insert_audit_entry_accepts_anonymous_actor() {
    let Some(pool) = fresh_pool().await else {
        return;
    };

    pool.insert_audit_entry(&NewAuditEntry {
        action: AuditAction::ViewMessages,
        actor_id: None,
        target_kind: TargetKind::Chat,
        target_id: 5,
    })
    .await
    .unwrap();

    assert_eq!(audit_count(&pool).await, 1);
    let entries = pool.list_recent_audit_entries(50).await.unwrap();
    assert_eq!(entries[0].action, "view_messages");
    assert_eq!(entries[0].target_type, "chat");
    assert_eq!(entries[0].username, GUEST_DISPLAY_NAME);
}
