//! Repository traitパターン定義
//!
//! DB操作を抽象化し、サービス層をDBなしでテストできるようにする。
//! 本番実装は`PgPool`に対して各モジュールのフリー関数へ委譲する。

use async_trait::async_trait;
use sqlx::PgPool;

use crate::audit::types::{AuditLogView, NewAuditEntry};
use crate::common::error::ChatResult;
use crate::common::types::{ChatId, ChatMessage, MessageId, NewMessage};

/// チャットと監査ログのストレージ操作
#[async_trait]
pub trait ChatStore: Send + Sync {
    /// チャット内のメッセージを送信日時の昇順で取得
    async fn list_messages_by_chat(&self, chat_id: ChatId) -> ChatResult<Vec<ChatMessage>>;

    /// メッセージを挿入し、採番されたIDを返す
    async fn insert_message(&self, message: &NewMessage) -> ChatResult<MessageId>;

    /// 監査ログを1件追記
    async fn insert_audit_entry(&self, entry: &NewAuditEntry) -> ChatResult<()>;

    /// 直近の監査ログを作成日時の降順で取得
    async fn list_recent_audit_entries(&self, limit: i64) -> ChatResult<Vec<AuditLogView>>;
}

#[async_trait]
impl ChatStore for PgPool {
    async fn list_messages_by_chat(&self, chat_id: ChatId) -> ChatResult<Vec<ChatMessage>> {
        super::messages::list_messages_by_chat(self, chat_id).await
    }

    async fn insert_message(&self, message: &NewMessage) -> ChatResult<MessageId> {
        super::messages::insert_message(self, message).await
    }

    async fn insert_audit_entry(&self, entry: &NewAuditEntry) -> ChatResult<()> {
        super::audit_log::insert_entry(self, entry).await
    }

    async fn list_recent_audit_entries(&self, limit: i64) -> ChatResult<Vec<AuditLogView>> {
        super::audit_log::list_recent(self, limit).await
    }
}
