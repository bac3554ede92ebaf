//! 共通型定義
//!
//! チャットメッセージの表示用データ型

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// チャットID
pub type ChatId = i32;

/// ユーザーID
pub type UserId = i32;

/// メッセージID
pub type MessageId = i32;

/// 表示用のチャットメッセージ
///
/// `messages`と`users`の結合結果。送信者は表示名に解決済み。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ChatMessage {
    /// メッセージID
    pub id: MessageId,
    /// 送信者の表示名
    pub sender: String,
    /// 本文
    pub content: String,
    /// 送信日時（DB側で付与）
    pub sent_at: NaiveDateTime,
}

/// 新規メッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    /// 送信者ID
    pub sender_id: UserId,
    /// 投稿先チャットID
    pub chat_id: ChatId,
    /// 本文
    pub content: String,
}
