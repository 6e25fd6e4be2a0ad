//! Inbound message processing and subscription lifecycle.

use std::sync::Arc;

use prometheus_client::metrics::counter::Counter;
use tracing::{debug, info, trace, warn};
use victron_common::{decode_numeric_or_nan, decode_text, parse_topic};

use crate::health::ConnectionHealth;
use crate::identity::IdentityGate;
use crate::observer::{Observation, Observer};
use crate::registry::MetricRegistry;
use crate::router::TopicRouter;
use crate::transport::{ConnectionHandler, Subscribe};

/// Why a message did not update a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Fewer than five topic segments.
    MalformedTopic,
    /// No route for the suffix.
    UnknownSuffix,
    /// Payload did not decode.
    Decode,
}

/// Outcome of handling one message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dispatch {
    Observed(Observation),
    /// A serial message was consumed by the identity gate.
    Identity { latched: bool },
    Ignored(IgnoreReason),
}

/// Ingestion statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandlerStats {
    pub updates_received: u64,
    pub updates_ignored: u64,
}

/// Routes inbound telemetry into the registry and keeps the subscription alive.
#[derive(Debug)]
pub struct SubscriptionHandler {
    router: TopicRouter,
    observer: Observer,
    gate: Arc<IdentityGate>,
    health: Arc<ConnectionHealth>,
    updates: Counter,
    updates_ignored: Counter,
    topic_filter: String,
}

impl SubscriptionHandler {
    pub fn new(
        router: TopicRouter,
        registry: Arc<MetricRegistry>,
        gate: Arc<IdentityGate>,
        health: Arc<ConnectionHealth>,
        topic_filter: impl Into<String>,
    ) -> Self {
        let operational = registry.operational();
        let updates = operational.updates.clone();
        let updates_ignored = operational.updates_ignored.clone();

        Self {
            router,
            observer: Observer::new(registry),
            gate,
            health,
            updates,
            updates_ignored,
            topic_filter: topic_filter.into(),
        }
    }

    /// Process one inbound message. Never fails; problems are counted and logged.
    pub fn handle_message(&self, topic: &str, payload: &[u8]) -> Dispatch {
        self.updates.inc();

        let Some(parsed) = parse_topic(topic) else {
            trace!(topic, "Ignoring topic with too few segments");
            return self.ignore(IgnoreReason::MalformedTopic);
        };

        if parsed.is_serial() && !self.gate.is_latched() {
            return match decode_text(payload) {
                Ok(serial) => Dispatch::Identity {
                    latched: self.gate.try_latch(serial.as_deref().unwrap_or_default()),
                },
                Err(e) => {
                    debug!(topic, error = %e, "Failed to decode serial payload");
                    self.ignore(IgnoreReason::Decode)
                }
            };
        }

        let Some(definition) = self.router.resolve(parsed.suffix) else {
            trace!(topic, suffix = parsed.suffix, "No metric for suffix");
            return self.ignore(IgnoreReason::UnknownSuffix);
        };

        let value = match decode_numeric_or_nan(payload) {
            Ok(value) => value,
            Err(e) => {
                debug!(topic, metric = definition.name, error = %e, "Failed to decode payload");
                return self.ignore(IgnoreReason::Decode);
            }
        };

        trace!(
            metric = definition.name,
            component_type = parsed.component_type,
            component_id = parsed.component_id,
            value,
            "Observed"
        );

        Dispatch::Observed(self.observer.observe(
            definition,
            parsed.component_type,
            parsed.component_id,
            value,
        ))
    }

    /// Mark the connection healthy and (re)issue the telemetry subscription.
    pub fn on_connect(&self, client_id: &str, client: &dyn Subscribe) {
        self.health.on_connected(client_id);

        match client.subscribe(&self.topic_filter) {
            Ok(()) => info!(client_id, topic = %self.topic_filter, "Subscribed to telemetry"),
            Err(e) => warn!(
                client_id,
                topic = %self.topic_filter,
                error = %e,
                "Failed to subscribe"
            ),
        }
    }

    pub fn on_disconnect(&self, client_id: &str) {
        self.health.on_disconnected(client_id);
    }

    pub fn stats(&self) -> HandlerStats {
        HandlerStats {
            updates_received: self.updates.get(),
            updates_ignored: self.updates_ignored.get(),
        }
    }

    pub fn gate(&self) -> &IdentityGate {
        &self.gate
    }

    fn ignore(&self, reason: IgnoreReason) -> Dispatch {
        self.updates_ignored.inc();
        Dispatch::Ignored(reason)
    }
}

impl ConnectionHandler for SubscriptionHandler {
    fn on_connect(&self, client_id: &str, client: &dyn Subscribe) {
        SubscriptionHandler::on_connect(self, client_id, client);
    }

    fn on_disconnect(&self, client_id: &str) {
        SubscriptionHandler::on_disconnect(self, client_id);
    }

    fn on_message(&self, topic: &str, payload: &[u8]) {
        self.handle_message(topic, payload);
    }
}

/// The publishing connection only reports its health.
impl ConnectionHandler for ConnectionHealth {
    fn on_connect(&self, client_id: &str, _client: &dyn Subscribe) {
        self.on_connected(client_id);
    }

    fn on_disconnect(&self, client_id: &str) {
        self.on_disconnected(client_id);
    }

    fn on_message(&self, topic: &str, _payload: &[u8]) {
        trace!(topic, "Unexpected message on publishing connection");
    }
}
