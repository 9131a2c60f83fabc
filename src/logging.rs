use tracing_subscriber::EnvFilter;

use crate::config::LogLevel;

/// Install the global subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over the level chosen on the command line.
pub fn init(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
