//! メッセージサービス
//!
//! 主操作を完了させてから監査ログを追記する。主操作が失敗した場合は追記しない。

use crate::audit::types::{AuditAction, TargetKind};
use crate::audit::writer::AuditWriter;
use crate::common::error::ChatResult;
use crate::common::types::{ChatId, ChatMessage, MessageId, NewMessage};
use crate::db::traits::ChatStore;
use std::sync::Arc;

/// チャット閲覧とメッセージ投稿
#[derive(Clone)]
pub struct MessageService {
    store: Arc<dyn ChatStore>,
    audit: AuditWriter,
}

impl MessageService {
    /// 新しいMessageServiceを作成
    pub fn new(store: Arc<dyn ChatStore>, audit: AuditWriter) -> Self {
        Self { store, audit }
    }

    /// チャットのメッセージ一覧を取得し、匿名の閲覧記録を残す
    pub async fn view_chat(&self, chat_id: ChatId) -> ChatResult<Vec<ChatMessage>> {
        let messages = self.store.list_messages_by_chat(chat_id).await?;

        self.audit
            .record(AuditAction::ViewMessages, None, TargetKind::Chat, chat_id)
            .await;

        Ok(messages)
    }

    /// メッセージを投稿し、送信者をアクターとして記録する
    pub async fn add_message(&self, message: NewMessage) -> ChatResult<MessageId> {
        let message_id = self.store.insert_message(&message).await?;

        self.audit
            .record(
                AuditAction::AddMessage,
                Some(message.sender_id),
                TargetKind::Message,
                message_id,
            )
            .await;

        Ok(message_id)
    }
}
