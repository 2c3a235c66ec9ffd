use crate::config::TelemetryConfig;
use std::env;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Failures while installing the global tracing subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid tracing filter '{value}' (from {origin})")]
    Filter {
        value: String,
        origin: &'static str,
        #[source]
        source: ParseError,
    },
    #[error("unable to install tracing subscriber: {0}")]
    Install(Box<dyn std::error::Error + Send + Sync>),
}

/// Install the subscriber for this process.
///
/// The configured level is the baseline; a `RUST_LOG` variable overrides it
/// for ad hoc debugging, and an unparsable override is reported rather than
/// silently dropped. Log lines go to stderr so they never interleave with
/// command output on stdout.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = match env::var("RUST_LOG") {
        Ok(spec) => EnvFilter::try_new(&spec).map_err(|source| TelemetryError::Filter {
            value: spec,
            origin: "RUST_LOG",
            source,
        })?,
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::Filter {
                value: config.log_level.clone(),
                origin: "FRONTDESK_LOG_LEVEL",
                source,
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(TelemetryError::Install)
}
