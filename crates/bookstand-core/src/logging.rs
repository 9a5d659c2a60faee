use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::LOG_FILTER_ENV;

/// Install the global tracing subscriber.
///
/// The TUI owns the terminal, so nothing may write to stdout or stderr
/// while it runs. Events go to a file when one is configured and are
/// otherwise discarded.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new("bookstand_core=info,bookstand=info"));
    let registry = tracing_subscriber::registry().with(filter);

    let Some(path) = log_file else {
        registry.init();
        return Ok(());
    };

    let sink = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    registry
        .with(
            fmt::layer()
                .with_writer(sink)
                .with_ansi(false)
                .with_target(true),
        )
        .init();
    Ok(())
}
