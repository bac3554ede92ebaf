//! サービス層
//!
//! ストア操作と監査ログ追記の順序を管理する。HTTPには依存しない。

/// チャット閲覧・メッセージ投稿
pub mod messages;

/// 監査ログ閲覧
pub mod logs;
