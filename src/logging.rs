//! File-based logging for the mood ring
//!
//! The terminal belongs to the UI, so tracing output goes to a daily rolling
//! file instead of stdout.

use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

const LOG_DIR: &str = ".logs";
const LOG_FILE_PREFIX: &str = "mood-ring";

/// Initialize the logging system.
///
/// Logs are written to `.logs/mood-ring.YYYY-MM-DD.log`. `RUST_LOG`
/// overrides the default filter (`mood_ring=debug,reqwest=info,warn`).
pub fn init_logging() -> anyhow::Result<()> {
    let log_dir = Path::new(LOG_DIR);
    if !log_dir.exists() {
        std::fs::create_dir_all(log_dir)?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, LOG_DIR, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // The writer flushes on drop; keep it for the whole process
    Box::leak(Box::new(guard));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mood_ring=debug,reqwest=info,warn"));

    let fmt_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("Logging initialized - logs written to {}/", LOG_DIR);

    Ok(())
}

/// Record how a catalog call ended. `$result` is borrowed, so the caller can
/// still return it. Failures land at error level with the error's display text.
#[macro_export]
macro_rules! log_api_result {
    ($operation:expr, $result:expr) => {
        match &$result {
            Ok(_) => tracing::info!(operation = $operation, "Catalog call finished"),
            Err(e) => tracing::error!(operation = $operation, error = %e, "Catalog call failed"),
        }
    };
}

/// Debug line emitted before a catalog request goes out, e.g.
/// `log_api_request!("fetch_top_tracks", url = %url)`
#[macro_export]
macro_rules! log_api_request {
    ($operation:expr, $($field:tt)*) => {
        tracing::debug!(operation = $operation, $($field)*, "Catalog call started");
    };
}
