//! 監査ログの型定義

use crate::common::types::UserId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// アクター不在時の表示名（ウクライナ語で「ゲスト」）
pub const GUEST_DISPLAY_NAME: &str = "Гість";

/// 監査ログ一覧の最大件数
pub const RECENT_AUDIT_LIMIT: i64 = 50;

/// 監査対象の操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// チャット閲覧
    ViewMessages,
    /// メッセージ投稿
    AddMessage,
}

impl AuditAction {
    /// DBに保存する文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewMessages => "view_messages",
            Self::AddMessage => "add_message",
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 監査対象の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// チャット
    Chat,
    /// メッセージ
    Message,
}

impl TargetKind {
    /// DBに保存する文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 追記する監査ログエントリ
///
/// 作成日時はDB側で付与する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuditEntry {
    /// 操作
    pub action: AuditAction,
    /// 操作したユーザー（匿名操作はNone）
    pub actor_id: Option<UserId>,
    /// 対象種別
    pub target_kind: TargetKind,
    /// 対象ID
    pub target_id: i32,
}

/// 表示用の監査ログエントリ
///
/// アクターは表示名に解決済み。アクター不在時は[`GUEST_DISPLAY_NAME`]。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuditLogView {
    /// 操作名
    pub action: String,
    /// アクターの表示名
    pub username: String,
    /// 対象種別
    pub target_type: String,
    /// 対象ID
    pub target_id: i32,
    /// 作成日時
    pub created_at: NaiveDateTime,
}
