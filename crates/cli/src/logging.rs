use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use super::error::Error;

/// Overrides every other log setting when set, e.g. `SHORTEST_PATH_LOG=trace`.
pub const LOG_ENV: &str = "SHORTEST_PATH_LOG";

/// Initialize logging to stderr.
///
/// Precedence: `SHORTEST_PATH_LOG`, then `--log-level`, then `--verbose`
/// (debug), then the configured level.
pub fn init_tracing(verbose: bool, log_level: Option<&str>, configured: &str) -> Result<(), Error> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => configured,
    };

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(directive(level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| Error::LoggingInit(e.to_string()))
}

/// Scopes a bare level to this workspace's crates; full directives pass through.
fn directive(level: &str) -> String {
    if level.contains('=') {
        level.to_string()
    } else {
        format!("shortest_path={level},shortest_path_core={level}")
    }
}
