//! chatview Server
//!
//! PostgreSQLに保存されたチャットを閲覧・投稿し、操作を監査ログに記録する小さなWebサーバー

#![warn(missing_docs)]

/// 共通型定義
pub mod common;

/// HTTPハンドラー
pub mod api;

/// 監査ログシステム
pub mod audit;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// データベースアクセス
pub mod db;

/// ロギング初期化ユーティリティ
pub mod logging;

/// axumサーバー起動
pub mod server;

/// サービス層
pub mod service;

use api::render::Templates;
use audit::writer::AuditWriter;
use config::WebConfig;
use db::traits::ChatStore;
use service::{logs::LogService, messages::MessageService};
use std::path::PathBuf;
use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// チャット閲覧・投稿
    pub messages: MessageService,
    /// 監査ログ閲覧
    pub logs: LogService,
    /// HTMLテンプレート
    pub templates: Templates,
    /// 静的ファイルのディレクトリ
    pub static_dir: PathBuf,
}

impl AppState {
    /// ストアとWeb設定からアプリケーション状態を組み立てる
    pub fn new(store: Arc<dyn ChatStore>, web: &WebConfig) -> Self {
        let audit = AuditWriter::new(store.clone());
        Self {
            messages: MessageService::new(store.clone(), audit),
            logs: LogService::new(store),
            templates: Templates::new(&web.template_dir),
            static_dir: web.static_dir.clone(),
        }
    }
}
