//! Prometheus exporter for Victron Venus OS.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::watch;
use tracing::{error, info, warn};

use victron_common::init_tracing;
use victron_exporter::{
    ConnectionHealth, ExporterConfig, HttpServer, IdentityGate, MetricRegistry, MqttDriver,
    SerialPoller, SubscriptionHandler, TopicRouter,
};

/// Prometheus exporter for Victron Venus OS.
#[derive(Parser, Debug)]
#[command(name = "victron-exporter")]
#[command(about = "Export Victron Venus OS MQTT telemetry as Prometheus metrics")]
#[command(version)]
struct Args {
    /// Path to configuration file (JSON5 format).
    #[arg(short, long)]
    config: Option<String>,

    /// HTTP listen address (overrides config).
    #[arg(long)]
    listen: Option<String>,

    /// MQTT broker host (overrides config).
    #[arg(long, env = "MQTT_HOST")]
    mqtt_host: Option<String>,

    /// MQTT broker port (overrides config).
    #[arg(long, env = "MQTT_PORT")]
    mqtt_port: Option<u16>,

    /// Connect to the broker over TLS (overrides config).
    #[arg(long, env = "MQTT_SECURE")]
    mqtt_secure: Option<bool>,

    /// Prefix for MQTT client ids (overrides config).
    #[arg(long, env = "MQTT_CLIENT_PREFIX")]
    mqtt_client_prefix: Option<String>,

    /// MQTT username.
    #[arg(long, env = "MQTT_USERNAME")]
    mqtt_username: Option<String>,

    /// MQTT password.
    #[arg(long, env = "MQTT_PASSWORD", hide_env_values = true)]
    mqtt_password: Option<String>,

    /// Seconds between serial requests (overrides config).
    #[arg(long, env = "VICTRON_POLL_INTERVAL_SECS")]
    poll_interval_secs: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn apply(self, config: &mut ExporterConfig) {
        if let Some(listen) = self.listen {
            config.prometheus.listen = listen;
        }
        if let Some(host) = self.mqtt_host {
            config.mqtt.host = host;
        }
        if let Some(port) = self.mqtt_port {
            config.mqtt.port = port;
        }
        if let Some(secure) = self.mqtt_secure {
            config.mqtt.secure = secure;
        }
        if let Some(prefix) = self.mqtt_client_prefix {
            config.mqtt.client_prefix = prefix;
        }
        if let Some(username) = self.mqtt_username {
            config.mqtt.username = Some(username);
        }
        if let Some(password) = self.mqtt_password {
            config.mqtt.password = Some(password);
        }
        if let Some(interval) = self.poll_interval_secs {
            config.victron.poll_interval_secs = interval;
        }
        if let Some(level) = self.log_level {
            config.logging.level = level;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load configuration; CLI values win over the file
    let mut config = if let Some(config_path) = &args.config {
        ExporterConfig::read_from_file(config_path)?
    } else {
        ExporterConfig::default()
    };
    args.apply(&mut config);
    config.validate()?;

    init_tracing(&config.logging)?;

    info!(
        host = %config.mqtt.host,
        port = config.mqtt.port,
        secure = config.mqtt.secure,
        "Starting Victron Prometheus Exporter"
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Core state
    let router = TopicRouter::victron();
    let registry = Arc::new(MetricRegistry::new(router.definitions()));
    let gate = Arc::new(IdentityGate::new());
    let health = Arc::new(ConnectionHealth::new(registry.operational()));
    info!(
        routes = router.len(),
        families = registry.family_count(),
        "Metric registry ready"
    );

    let subscriber_id = config.mqtt.subscriber_client_id();
    let publisher_id = config.mqtt.publisher_client_id();
    health.track(&subscriber_id);
    health.track(&publisher_id);

    let handler = Arc::new(SubscriptionHandler::new(
        router,
        registry.clone(),
        gate.clone(),
        health.clone(),
        config.mqtt.topic.clone(),
    ));

    let listen_addr = config
        .prometheus
        .listen
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address: {}", e))?;

    // Components
    let subscriber = MqttDriver::new(&config.mqtt, subscriber_id.clone())?;
    let publisher = MqttDriver::new(&config.mqtt, publisher_id.clone())?;
    let poller = SerialPoller::new(
        Arc::new(publisher.client()),
        publisher_id,
        gate.clone(),
        health.clone(),
        Duration::from_secs(config.victron.poll_interval_secs),
    );
    let http_server = HttpServer::new(
        registry.clone(),
        health.clone(),
        &subscriber_id,
        listen_addr,
        config.prometheus.path.clone(),
    );

    let subscriber_task = tokio::spawn(subscriber.run(handler.clone(), shutdown_rx.clone()));
    let publisher_task = tokio::spawn(publisher.run(health.clone(), shutdown_rx.clone()));
    let poller_task = tokio::spawn(poller.run(shutdown_rx.clone()));

    let http_shutdown = shutdown_rx.clone();
    let http_task = tokio::spawn(async move {
        if let Err(e) = http_server.run(http_shutdown).await {
            error!("HTTP server error: {}", e);
        }
    });

    // Wait for shutdown signal
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate() => {
            info!("Received SIGTERM, shutting down...");
        }
    }

    shutdown_tx.send(true)?;

    let _ = tokio::time::timeout(Duration::from_secs(5), async {
        let _ = subscriber_task.await;
        let _ = publisher_task.await;
        let _ = poller_task.await;
        let _ = http_task.await;
    })
    .await;

    let stats = handler.stats();
    info!(
        updates_received = stats.updates_received,
        updates_ignored = stats.updates_ignored,
        serial = gate.get(),
        "Final statistics"
    );

    info!("Exporter stopped");
    Ok(())
}

#[cfg(unix)]
async fn terminate() {
    match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
        Ok(mut sigterm) => {
            sigterm.recv().await;
        }
        Err(e) => {
            warn!(error = %e, "Failed to install SIGTERM handler");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate() {
    std::future::pending::<()>().await;
}
