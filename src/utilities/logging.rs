// Logging setup
// Installs the tracing subscriber shared by the binaries

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when RUST_LOG is not set
const DEFAULT_LOG_LEVEL: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Log to a file, appending; keeps the terminal free for the UI
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let fmt_layer = fmt::layer().with_ansi(false).with_target(true).with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}

/// Log compactly to stderr so stdout stays machine readable
pub fn init_stderr_logging() -> Result<()> {
    let fmt_layer = fmt::layer().compact().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}
