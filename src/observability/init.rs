//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` if set and valid
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Output
///
/// With `config.log_file` set, events go through a rotating [`FileWriter`]
/// (without ANSI colors); otherwise to stderr. An unusable log directory falls
/// back to stderr.
///
/// # Initialization Behavior
///
/// Idempotent: only the first call takes effect and later ones are silent.
///
/// # Example
///
/// ```rust
/// use swipedeck::observability::init_tracing;
/// use swipedeck::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.clone().unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let log_file = config
        .log_file
        .as_deref()
        .map(crate::infrastructure::paths::expand_tilde)
        .filter(|path| match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => std::fs::create_dir_all(dir).is_ok(),
            _ => true,
        });

    match log_file {
        Some(path) => {
            let writer = Arc::new(FileWriter::new(path));
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
        }
        None => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
        }
    }
}
