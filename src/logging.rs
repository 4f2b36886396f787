use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{FlattenError, Result};

/// Initialises the tracing subscriber for the command line binary.
///
/// Reads `RUST_LOG`, defaulting to `warn` when unset. Events go to stderr in
/// compact format so they never mix with redirected output.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
        .map_err(|error| FlattenError::Logging(error.to_string()))
}
