//! 監査ログライター
//!
//! 元の操作が完了した後に同じリクエスト内で1件追記する。
//! 追記の失敗はwarnログに記録して破棄し、呼び出し元には返さない。

use crate::audit::types::{AuditAction, NewAuditEntry, TargetKind};
use crate::common::types::UserId;
use crate::db::traits::ChatStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// 監査ログライター
///
/// Clone可能（ストアの共有参照を保持するだけ）。
#[derive(Clone)]
pub struct AuditWriter {
    store: Arc<dyn ChatStore>,
}

impl AuditWriter {
    /// 新しいAuditWriterを作成
    pub fn new(store: Arc<dyn ChatStore>) -> Self {
        Self { store }
    }

    /// 監査ログを1件追記する
    ///
    /// 失敗しても呼び出し元の処理は成功扱いのまま続行する。
    pub async fn record(
        &self,
        action: AuditAction,
        actor_id: Option<UserId>,
        target_kind: TargetKind,
        target_id: i32,
    ) {
        let entry = NewAuditEntry {
            action,
            actor_id,
            target_kind,
            target_id,
        };

        match self.store.insert_audit_entry(&entry).await {
            Ok(()) => debug!(
                action = %action,
                target_kind = %target_kind,
                target_id,
                "Audit entry appended"
            ),
            Err(e) => warn!(
                action = %action,
                target_kind = %target_kind,
                target_id,
                error = %e,
                "Failed to append audit entry"
            ),
        }
    }
}
