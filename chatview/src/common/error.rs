//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! ハンドラー境界でHTTPステータスと短い固定メッセージに変換される。
//! 内部の詳細（SQLエラー文など）はログにのみ出力し、クライアントには返さない。

use axum::http::StatusCode;
use thiserror::Error;

/// chatview error type
#[derive(Debug, Error)]
pub enum ChatError {
    /// Malformed request body
    #[error("Invalid form: {0}")]
    FormInvalid(String),

    /// Database connectivity or execution failure
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// A result row could not be projected into the expected shape
    #[error("Result decoding failed: {0}")]
    ResultDecodingFailed(String),

    /// 監査ログの追記失敗（観測用。クライアントには返さない）
    #[error("Audit append failed: {0}")]
    AuditAppendFailed(String),

    /// テンプレートの読み込み・描画失敗
    #[error("Template error: {0}")]
    Template(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChatError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::FormInvalid(_) => StatusCode::BAD_REQUEST,
            Self::StorageUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ResultDecodingFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::AuditAppendFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// chatview result type
pub type ChatResult<T> = Result<T, ChatError>;
