use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Filter used when neither RUST_LOG nor the config file sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Filter forced by `--verbose`
pub const VERBOSE_LOG_LEVEL: &str = "debug";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter { value: String, source: ParseError },
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Parse a filter directive such as "warn" or "aem=debug".
pub fn parse_filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directives).map_err(|source| TelemetryError::EnvFilter {
        value: directives.to_string(),
        source,
    })
}

/// Build the log filter: `--verbose` wins, then RUST_LOG, then the given level.
pub fn build_filter(log_level: &str, verbose: bool) -> Result<EnvFilter, TelemetryError> {
    if verbose {
        return parse_filter(VERBOSE_LOG_LEVEL);
    }
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => parse_filter(log_level),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for the report.
pub fn init(log_level: &str, verbose: bool) -> Result<(), TelemetryError> {
    let env_filter = build_filter(log_level, verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
