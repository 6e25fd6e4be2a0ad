//! Victron Common Library
//!
//! Shared types and utilities for the Victron MQTT exporter:
//!
//! - [`topic`] - Venus OS topic parsing and request topic builders
//! - [`payload`] - `{"value": ...}` payload decoding
//! - [`config`] - MQTT and logging configuration sections
//! - [`error`] - Error types

pub mod config;
pub mod error;
pub mod payload;
pub mod topic;

// Re-export commonly used types at the crate root
pub use config::{LogFormat, LoggingConfig, MqttConfig};
pub use error::{Error, Result};
pub use payload::{decode_numeric, decode_numeric_or_nan, decode_text};
pub use topic::{ParsedTopic, SERIAL_SUFFIX, parse_topic, serial_request_topic};

/// Initialize tracing with the given configuration.
///
/// `RUST_LOG` takes precedence over the configured level.
///
/// # Example
///
/// ```ignore
/// use victron_common::{LoggingConfig, LogFormat, init_tracing};
///
/// let config = LoggingConfig {
///     level: "info".to_string(),
///     format: LogFormat::Json,
/// };
/// init_tracing(&config)?;
/// ```
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(fmt::layer())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json())
                .with(filter)
                .try_init()
                .map_err(|e| Error::Config(format!("Failed to initialize tracing: {}", e)))?;
        }
    }

    Ok(())
}
