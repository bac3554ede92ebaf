//! 監査ログシステム
//!
//! チャット閲覧とメッセージ投稿を追記専用のテーブルに記録する。
//! 監査は観測目的であり、書き込み失敗は元の操作を失敗させない。

/// 監査ログの型定義
pub mod types;

/// 監査ログライター
pub mod writer;
