//! Per-connection health state.

use std::collections::HashMap;

use chrono::Utc;
use parking_lot::RwLock;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use tracing::{info, warn};

use crate::registry::{ClientLabels, OperationalMetrics};

/// Mirrors connection state into the operational gauges and answers
/// "is this client connected" for the poller and readiness probe.
#[derive(Debug)]
pub struct ConnectionHealth {
    state: Family<ClientLabels, Gauge>,
    since: Family<ClientLabels, Gauge>,
    connected: RwLock<HashMap<String, bool>>,
}

impl ConnectionHealth {
    pub fn new(metrics: &OperationalMetrics) -> Self {
        Self {
            state: metrics.connection_state.clone(),
            since: metrics.connection_state_since.clone(),
            connected: RwLock::new(HashMap::new()),
        }
    }

    /// Export a disconnected series for `client_id` before its first connect.
    pub fn track(&self, client_id: &str) {
        let mut connected = self.connected.write();
        if connected.contains_key(client_id) {
            return;
        }
        connected.insert(client_id.to_string(), false);
        self.record(client_id, false);
    }

    pub fn on_connected(&self, client_id: &str) {
        self.connected.write().insert(client_id.to_string(), true);
        self.record(client_id, true);
        info!(client_id, "MQTT connection established");
    }

    pub fn on_disconnected(&self, client_id: &str) {
        self.connected.write().insert(client_id.to_string(), false);
        self.record(client_id, false);
        warn!(client_id, "MQTT connection lost");
    }

    pub fn is_connected(&self, client_id: &str) -> bool {
        self.connected.read().get(client_id).copied().unwrap_or(false)
    }

    fn record(&self, client_id: &str, connected: bool) {
        let labels = ClientLabels::new(client_id);
        self.state.get_or_create(&labels).set(i64::from(connected));
        self.since
            .get_or_create(&labels)
            .set(Utc::now().timestamp());
    }
}
