//! 監査ログ閲覧サービス
//!
//! 閲覧自体は監査しない（閲覧のたびにログが増え続けるのを避ける）。

use crate::audit::types::{AuditLogView, RECENT_AUDIT_LIMIT};
use crate::common::error::ChatResult;
use crate::db::traits::ChatStore;
use std::sync::Arc;

/// 監査ログ閲覧
#[derive(Clone)]
pub struct LogService {
    store: Arc<dyn ChatStore>,
}

impl LogService {
    /// 新しいLogServiceを作成
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        Self { store }
    }

    /// 直近50件の監査ログを新しい順に取得
    pub async fn recent_tail(&self) -> ChatResult<Vec<AuditLogView>> {
        self.store.list_recent_audit_entries(RECENT_AUDIT_LIMIT).await
    }
}
