//! File logging for the terminal client.
//!
//! Narration owns stdout, so tracing output goes to a per-session log file:
//! - Linux: `~/.cache/fantasy-quest/logs/<session>/quest.log`
//! - macOS: `~/Library/Caches/fantasy-quest/logs/<session>/quest.log`
//! - Windows: `%LOCALAPPDATA%\fantasy-quest\logs\<session>\quest.log`
//!
//! `QUEST_LOG_DIR` replaces the platform directory; `RUST_LOG` tunes the filter.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

const LOG_FILE: &str = "quest.log";

/// Installs the global file subscriber.
///
/// The returned guard flushes buffered log lines when dropped, so keep it
/// alive for the whole run.
pub fn setup_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let session_id = config.session_id.clone().unwrap_or_else(default_session_id);
    let session_log_dir = config.dir.clone().unwrap_or_else(log_dir).join(&session_id);

    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/{}", session_log_dir.display(), LOG_FILE);

    Ok(guard)
}

/// Platform cache directory for logs, `/tmp/fantasy-quest/logs` if unknown.
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "fantasy-quest")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/fantasy-quest"))
        .join("logs")
}

fn default_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}
