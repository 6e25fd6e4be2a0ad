//! Configuration for the Victron exporter.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use victron_common::{LoggingConfig, MqttConfig};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] json5::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Complete exporter configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// MQTT broker settings.
    #[serde(default)]
    pub mqtt: MqttConfig,

    /// GX device polling settings.
    #[serde(default)]
    pub victron: VictronConfig,

    /// Prometheus exporter settings.
    #[serde(default)]
    pub prometheus: PrometheusConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// GX device settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VictronConfig {
    /// Seconds between serial requests (default: 10).
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

fn default_poll_interval() -> u64 {
    10
}

impl Default for VictronConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
        }
    }
}

/// Prometheus HTTP endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrometheusConfig {
    /// Address to listen on (default: "0.0.0.0:9226").
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Path for metrics endpoint (default: "/metrics").
    #[serde(default = "default_path")]
    pub path: String,
}

fn default_listen() -> String {
    "0.0.0.0:9226".to_string()
}

fn default_path() -> String {
    "/metrics".to_string()
}

impl Default for PrometheusConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            path: default_path(),
        }
    }
}

impl ExporterConfig {
    /// Load and validate configuration from a JSON5 file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::read_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a JSON5 file without validating it, so that
    /// command line overrides can be applied first.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(json5::from_str(&content)?)
    }

    /// Parse configuration from a JSON5 string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: ExporterConfig = json5::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mqtt.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "mqtt.host must be set".to_string(),
            ));
        }

        if self.mqtt.port == 0 {
            return Err(ConfigError::Validation("mqtt.port must be > 0".to_string()));
        }

        if self.mqtt.client_prefix.is_empty() {
            return Err(ConfigError::Validation(
                "mqtt.client_prefix must not be empty".to_string(),
            ));
        }

        if self.mqtt.reconnect_delay_secs == 0 {
            return Err(ConfigError::Validation(
                "mqtt.reconnect_delay_secs must be > 0".to_string(),
            ));
        }

        if self.mqtt.reconnect_delay_secs > self.mqtt.max_reconnect_delay_secs {
            return Err(ConfigError::Validation(
                "mqtt.reconnect_delay_secs must not exceed max_reconnect_delay_secs".to_string(),
            ));
        }

        if self.victron.poll_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "poll_interval_secs must be > 0".to_string(),
            ));
        }

        if self
            .prometheus
            .listen
            .parse::<std::net::SocketAddr>()
            .is_err()
        {
            return Err(ConfigError::Validation(format!(
                "Invalid listen address: {}",
                self.prometheus.listen
            )));
        }

        if !self.prometheus.path.starts_with('/') {
            return Err(ConfigError::Validation(
                "Metrics path must start with /".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use victron_common::LogFormat;

    #[test]
    fn test_parse_minimal() {
        let config = ExporterConfig::parse(r#"{ mqtt: { host: "venus.local" } }"#).unwrap();

        assert_eq!(config.mqtt.host, "venus.local");
        assert_eq!(config.mqtt.port, 8883);
        assert!(config.mqtt.secure);
        assert_eq!(config.mqtt.topic, "#");
        assert_eq!(config.victron.poll_interval_secs, 10);
        assert_eq!(config.prometheus.listen, "0.0.0.0:9226");
        assert_eq!(config.prometheus.path, "/metrics");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_full() {
        let config = ExporterConfig::parse(
            r#"{
                // GX device on the local network
                mqtt: {
                    host: "192.168.1.50",
                    port: 1883,
                    secure: false,
                    client_prefix: "garage",
                    username: "user",
                    password: "secret",
                },
                victron: { poll_interval_secs: 30 },
                prometheus: { listen: "127.0.0.1:9100", path: "/victron" },
                logging: { level: "debug", format: "json" },
            }"#,
        )
        .unwrap();

        assert_eq!(config.mqtt.port, 1883);
        assert!(!config.mqtt.secure);
        assert_eq!(config.mqtt.subscriber_client_id(), "garage_sub");
        assert_eq!(config.mqtt.username.as_deref(), Some("user"));
        assert_eq!(config.victron.poll_interval_secs, 30);
        assert_eq!(config.prometheus.path, "/victron");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_missing_host_rejected() {
        let result = ExporterConfig::parse("{}");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let cases = [
            r#"{ mqtt: { host: "gx", port: 0 } }"#,
            r#"{ mqtt: { host: "gx" }, victron: { poll_interval_secs: 0 } }"#,
            r#"{ mqtt: { host: "gx" }, prometheus: { listen: "not-an-address" } }"#,
            r#"{ mqtt: { host: "gx" }, prometheus: { path: "metrics" } }"#,
            r#"{ mqtt: { host: "gx", reconnect_delay_secs: 120, max_reconnect_delay_secs: 60 } }"#,
            r#"{ mqtt: { host: "gx", reconnect_delay_secs: 0, max_reconnect_delay_secs: 0 } }"#,
            r#"{ mqtt: { host: "gx", reconnect_delay_secs: 0 } }"#,
        ];

        for case in cases {
            assert!(
                matches!(ExporterConfig::parse(case), Err(ConfigError::Validation(_))),
                "accepted: {}",
                case
            );
        }
    }

    #[test]
    fn test_parse_error() {
        let result = ExporterConfig::parse("{ mqtt: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ mqtt: {{ host: "venus.local" }} }}"#).unwrap();

        let config = ExporterConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.mqtt.host, "venus.local");
    }

    #[test]
    fn test_read_skips_validation() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{ victron: {{ poll_interval_secs: 5 }} }}").unwrap();

        let mut config = ExporterConfig::read_from_file(file.path()).unwrap();
        assert!(config.validate().is_err());

        config.mqtt.host = "venus.local".to_string();
        assert!(config.validate().is_ok());
        assert_eq!(config.victron.poll_interval_secs, 5);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ExporterConfig::load_from_file("/nonexistent/victron.json5");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
