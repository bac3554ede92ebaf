//! 監査ログストレージ
//!
//! `audit_logs`は追記専用。更新・削除の経路は持たない。

use crate::audit::types::{AuditLogView, NewAuditEntry, GUEST_DISPLAY_NAME};
use crate::common::error::{ChatError, ChatResult};
use sqlx::{FromRow, PgPool};

const INSERT_SQL: &str = r#"
    INSERT INTO audit_logs (action, user_id, target_type, target_id, created_at)
    VALUES ($1, $2, $3, $4, now())
"#;

/// アクター不在（またはユーザー削除済み）の行は$1の表示名で埋める
const LIST_RECENT_SQL: &str = r#"
    SELECT a.action, COALESCE(u.username, $1) AS username, a.target_type, a.target_id, a.created_at
    FROM audit_logs a
    LEFT JOIN users u ON a.user_id = u.id
    ORDER BY a.created_at DESC
    LIMIT $2
"#;

/// 監査ログを1件追記
pub async fn insert_entry(pool: &PgPool, entry: &NewAuditEntry) -> ChatResult<()> {
    sqlx::query(INSERT_SQL)
        .bind(entry.action.as_str())
        .bind(entry.actor_id)
        .bind(entry.target_kind.as_str())
        .bind(entry.target_id)
        .execute(pool)
        .await
        .map_err(|e| ChatError::AuditAppendFailed(format!("Failed to insert audit log: {}", e)))?;

    Ok(())
}

/// 直近の監査ログを作成日時の降順で最大`limit`件取得
pub async fn list_recent(pool: &PgPool, limit: i64) -> ChatResult<Vec<AuditLogView>> {
    let rows = sqlx::query(LIST_RECENT_SQL)
        .bind(GUEST_DISPLAY_NAME)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(|e| ChatError::StorageUnavailable(format!("Failed to query audit logs: {}", e)))?;

    rows.iter()
        .map(|row| {
            AuditLogView::from_row(row).map_err(|e| {
                ChatError::ResultDecodingFailed(format!("Failed to scan audit log row: {}", e))
            })
        })
        .collect()
}
