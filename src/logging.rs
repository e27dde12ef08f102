use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the logging system with tracing.
///
/// Logs go to `log_file` when given, else to stderr if `to_stderr`, else nowhere.
/// `RUST_LOG` wins over the `verbose` default.
pub fn init_logging(log_file: Option<&Path>, to_stderr: bool, verbose: bool) -> Result<()> {
    let default = if verbose { "numguess=debug,warn" } else { "numguess=info,warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let registry = tracing_subscriber::registry().with(filter);

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        registry
            .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .init();
    } else if to_stderr {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }

    Ok(())
}
