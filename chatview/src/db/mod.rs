//! データベースアクセス層
//!
//! PostgreSQLへの接続プールとクエリ実行

/// メッセージストレージ
pub mod messages;

/// 監査ログストレージ
pub mod audit_log;

/// Repository traitパターン（テスタビリティ向上）
pub mod traits;

use crate::common::error::{ChatError, ChatResult};
use crate::config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// データベース接続プールを作成
///
/// `run_migrations`が有効な場合は同梱のマイグレーションを適用する。
/// スキーマは通常外部で管理されるため、既定では適用しない。
pub async fn create_pool(config: &DatabaseConfig) -> ChatResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.url)
        .await
        .map_err(|e| ChatError::StorageUnavailable(format!("Failed to connect: {}", e)))?;

    if config.run_migrations {
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| ChatError::StorageUnavailable(format!("Migration failed: {}", e)))?;
        info!("Database migrations applied");
    }

    Ok(pool)
}
