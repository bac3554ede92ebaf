//! 監査ログ閲覧API

use super::error::AppError;
use super::render::LOGS_TEMPLATE;
use crate::AppState;
use axum::{extract::State, response::Html};
use minijinja::context;

/// GET /logs - 直近の監査ログ
pub async fn view_logs(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let logs = state
        .logs
        .recent_tail()
        .await
        .map_err(AppError::audit_log)?;

    let html = state
        .templates
        .render(LOGS_TEMPLATE, context! { logs })
        .map_err(AppError::audit_log)?;

    Ok(Html(html))
}
