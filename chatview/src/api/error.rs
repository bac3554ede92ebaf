//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング。レスポンス本文は短い固定文字列のみ。

use crate::common::error::ChatError;
use axum::response::{IntoResponse, Response};
use tracing::error;

/// エラーが発生した画面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// `GET /chat/{chat_id}`
    ChatView,
    /// `POST /send`
    SendMessage,
    /// `GET /logs`
    AuditLog,
}

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError {
    surface: Surface,
    error: ChatError,
}

impl AppError {
    /// チャット閲覧のエラー
    pub fn chat_view(error: ChatError) -> Self {
        Self {
            surface: Surface::ChatView,
            error,
        }
    }

    /// メッセージ投稿のエラー
    pub fn send_message(error: ChatError) -> Self {
        Self {
            surface: Surface::SendMessage,
            error,
        }
    }

    /// 監査ログ閲覧のエラー
    pub fn audit_log(error: ChatError) -> Self {
        Self {
            surface: Surface::AuditLog,
            error,
        }
    }

    /// クライアントに返す本文
    pub fn public_message(&self) -> &'static str {
        match (self.surface, &self.error) {
            (_, ChatError::FormInvalid(_)) => "Parse error",
            (_, ChatError::Template(_)) => "Template error",
            (Surface::ChatView, ChatError::StorageUnavailable(_)) => "DB error",
            (Surface::ChatView, ChatError::ResultDecodingFailed(_)) => "Scan error",
            (Surface::AuditLog, ChatError::StorageUnavailable(_)) => "Log error",
            (Surface::AuditLog, ChatError::ResultDecodingFailed(_)) => "Log scan error",
            (Surface::SendMessage, ChatError::StorageUnavailable(_))
            | (Surface::SendMessage, ChatError::ResultDecodingFailed(_)) => "DB insert error",
            (_, ChatError::AuditAppendFailed(_)) | (_, ChatError::Config(_)) => {
                "Internal server error"
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 詳細はログにのみ出力する
        error!(surface = ?self.surface, error = %self.error, "Request failed");
        (self.error.status_code(), self.public_message()).into_response()
    }
}
