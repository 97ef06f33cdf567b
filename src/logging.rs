use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "warn";

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install a stderr tracing subscriber.
///
/// `RUST_LOG` takes precedence over the default filter, e.g.
/// `RUST_LOG=calview_core=debug` to trace view transitions.
pub fn init_logging() {
    LOGGING_INITIALIZED.get_or_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
