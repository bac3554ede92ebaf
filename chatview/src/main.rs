//! chatview Server Entry Point

use anyhow::Context;
use chatview::cli::Cli;
use chatview::config::AppConfig;
use chatview::{db, logging, server, AppState};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env().with_args(&cli);

    // ファイル出力のガードはプロセス終了まで保持する
    let _log_guard = logging::init(&config.log)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        max_connections = config.database.max_connections,
        "Starting chatview"
    );

    let pool = db::create_pool(&config.database)
        .await
        .context("Failed to initialize database pool")?;

    let state = AppState::new(Arc::new(pool.clone()), &config.web);

    let bind_addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    info!("Open {} in a browser", config.server.chat_url());

    server::run(state, listener, server::shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    Ok(())
}
