//! HTTPハンドラー
//!
//! チャット閲覧、メッセージ投稿、監査ログ閲覧、静的ファイル

pub mod chat;
pub mod error;
pub mod logs;
pub mod render;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// ルーターを作成
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/chat/{chat_id}", get(chat::view_chat))
        .route("/send", post(chat::send_message))
        .route("/logs", get(logs::view_logs))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
