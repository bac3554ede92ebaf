//! ロギング初期化ユーティリティ
//!
//! 標準出力へのテキスト/JSON出力と、任意の日次ローテーションファイル出力。

use crate::common::error::{ChatError, ChatResult};
use crate::config::{LogConfig, LogFormat};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// ログファイル名のプレフィックス
const LOG_FILE_PREFIX: &str = "chatview.log";

/// フィルタ式を解釈する。不正な場合は`info`にフォールバックする
fn build_filter(level: &str) -> EnvFilter {
    match EnvFilter::try_new(level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!(
                "WARN: log filter '{}' is invalid ({}); falling back to 'info'",
                level, e
            );
            EnvFilter::new("info")
        }
    }
}

/// グローバルsubscriberを設定する
///
/// ファイル出力が有効な場合は`WorkerGuard`を返す。プロセス終了まで保持すること
/// （dropすると未書き込みのログが失われる）。
pub fn init(config: &LogConfig) -> ChatResult<Option<WorkerGuard>> {
    let stdout_layer = match config.format {
        LogFormat::Json => fmt::layer().json().with_target(true).boxed(),
        LogFormat::Text => fmt::layer().with_target(true).boxed(),
    };

    let (file_layer, guard) = match &config.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(writer)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(build_filter(&config.level))
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ChatError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(guard)
}
