//! メッセージストレージ
//!
//! `messages`テーブルの読み書き。送信者名は`users`との内部結合で解決する。

use crate::common::error::{ChatError, ChatResult};
use crate::common::types::{ChatId, ChatMessage, MessageId, NewMessage};
use sqlx::{FromRow, PgPool};

/// 送信日時の昇順。同時刻は挿入順（ID）で並べる
const LIST_BY_CHAT_SQL: &str = r#"
    SELECT m.id, u.username AS sender, m.content, m.sent_at
    FROM messages m
    JOIN users u ON u.id = m.sender_id
    WHERE m.chat_id = $1
    ORDER BY m.sent_at, m.id
"#;

/// 全文検索列は本文から`simple`設定で生成する（単一ステートメント）
const INSERT_SQL: &str = r#"
    INSERT INTO messages (sender_id, chat_id, content, full_text_search)
    VALUES ($1, $2, $3, to_tsvector('simple', $3))
    RETURNING id
"#;

/// チャット内のメッセージ一覧を取得
///
/// 取得失敗は`StorageUnavailable`、行の射影失敗は`ResultDecodingFailed`。
pub async fn list_messages_by_chat(pool: &PgPool, chat_id: ChatId) -> ChatResult<Vec<ChatMessage>> {
    let rows = sqlx::query(LIST_BY_CHAT_SQL)
        .bind(chat_id)
        .fetch_all(pool)
        .await
        .map_err(|e| ChatError::StorageUnavailable(format!("Failed to list messages: {}", e)))?;

    rows.iter()
        .map(|row| {
            ChatMessage::from_row(row).map_err(|e| {
                ChatError::ResultDecodingFailed(format!("Failed to scan message row: {}", e))
            })
        })
        .collect()
}

/// メッセージを挿入し、採番されたIDを返す
pub async fn insert_message(pool: &PgPool, message: &NewMessage) -> ChatResult<MessageId> {
    sqlx::query_scalar::<_, MessageId>(INSERT_SQL)
        .bind(message.sender_id)
        .bind(message.chat_id)
        .bind(&message.content)
        .fetch_one(pool)
        .await
        .map_err(|e| ChatError::StorageUnavailable(format!("Failed to insert message: {}", e)))
}
