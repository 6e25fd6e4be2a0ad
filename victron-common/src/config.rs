use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// MQTT broker connection configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MqttConfig {
    /// Broker host name or address (the Venus OS device or VRM broker).
    #[serde(default)]
    pub host: String,

    /// Broker port (default: 8883).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Connect over TLS (default: true).
    ///
    /// The broker certificate is verified against the platform's native roots
    /// unless `ca_file` is set. A GX device's local broker and the VRM broker
    /// do not chain to those roots, so TLS connections to them need `ca_file`
    /// pointing at the Victron root certificate.
    #[serde(default = "default_secure")]
    pub secure: bool,

    /// PEM file with the root certificate of the broker.
    ///
    /// When unset, the platform's native roots are used; see `secure`.
    #[serde(default)]
    pub ca_file: Option<PathBuf>,

    /// Prefix for MQTT client ids; `_sub` and `_pub` are appended.
    #[serde(default = "default_client_prefix")]
    pub client_prefix: String,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// Topic filter for the telemetry subscription.
    #[serde(default = "default_topic")]
    pub topic: String,

    /// MQTT keep-alive interval in seconds.
    #[serde(default = "default_keep_alive")]
    pub keep_alive_secs: u64,

    /// Initial delay before reconnecting after a transport error.
    #[serde(default = "default_reconnect_delay")]
    pub reconnect_delay_secs: u64,

    /// Upper bound for the reconnect backoff.
    #[serde(default = "default_max_reconnect_delay")]
    pub max_reconnect_delay_secs: u64,
}

fn default_port() -> u16 {
    8883
}

fn default_secure() -> bool {
    true
}

fn default_client_prefix() -> String {
    "victron_exporter".to_string()
}

fn default_topic() -> String {
    "#".to_string()
}

fn default_keep_alive() -> u64 {
    30
}

fn default_reconnect_delay() -> u64 {
    1
}

fn default_max_reconnect_delay() -> u64 {
    60
}

impl MqttConfig {
    /// Client id of the connection carrying the telemetry subscription.
    pub fn subscriber_client_id(&self) -> String {
        format!("{}_sub", self.client_prefix)
    }

    /// Client id of the connection used for outbound requests.
    pub fn publisher_client_id(&self) -> String {
        format!("{}_pub", self.client_prefix)
    }
}

impl Default for MqttConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: default_port(),
            secure: default_secure(),
            ca_file: None,
            client_prefix: default_client_prefix(),
            username: None,
            password: None,
            topic: default_topic(),
            keep_alive_secs: default_keep_alive(),
            reconnect_delay_secs: default_reconnect_delay(),
            max_reconnect_delay_secs: default_max_reconnect_delay(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format (default).
    #[default]
    Text,
    /// Structured JSON format.
    Json,
}

/// Common logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}
