//! CLI module for chatview
//!
//! Command-line flags override the corresponding environment variables.

use clap::Parser;
use std::path::PathBuf;

/// chatview - minimal chat viewer with an audit trail
#[derive(Parser, Debug)]
#[command(name = "chatview")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    CHATVIEW_DATABASE_URL             PostgreSQL URL (fallback: DATABASE_URL)
    CHATVIEW_HOST                     Bind address (default: 0.0.0.0)
    CHATVIEW_PORT                     Listen port (default: 8080)
    CHATVIEW_DB_MAX_CONNECTIONS       Pool size (default: 10)
    CHATVIEW_DB_ACQUIRE_TIMEOUT_SECS  Pool acquire timeout (default: 5)
    CHATVIEW_RUN_MIGRATIONS           Apply bundled migrations at startup
    CHATVIEW_TEMPLATE_DIR             Template directory (default: templates)
    CHATVIEW_STATIC_DIR               Static directory (default: static)
    CHATVIEW_LOG_LEVEL                Log filter (default: info, fallback: RUST_LOG)
    CHATVIEW_LOG_FORMAT               text | json (default: text)
    CHATVIEW_LOG_DIR                  Also write daily log files to this directory
"#)]
pub struct Cli {
    /// Bind address
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// PostgreSQL connection string
    #[arg(long)]
    pub database_url: Option<String>,

    /// Apply bundled migrations before serving
    #[arg(long, default_value_t = false)]
    pub migrate: bool,

    /// Template directory
    #[arg(long)]
    pub template_dir: Option<PathBuf>,

    /// Static asset directory
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}
