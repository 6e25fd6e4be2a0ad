//! Metric registry holding every exported Prometheus family.

use std::collections::HashMap;
use std::sync::atomic::AtomicU64;

use prometheus_client::encoding::EncodeLabelSet;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use tracing::warn;

/// Namespace prepended to every exported metric name.
pub const NAMESPACE: &str = "victron";

/// Label carrying the component type (e.g. `battery`, `vebus`).
pub const COMPONENT_TYPE_LABEL: &str = "component_type";

/// Label carrying the component instance id.
pub const COMPONENT_ID_LABEL: &str = "component_id";

/// Label set of a measurement series: component type, component id, then fixed labels.
pub type SeriesLabels = Vec<(String, String)>;

/// Floating point gauge.
pub type FloatGauge = Gauge<f64, AtomicU64>;

/// Floating point counter.
pub type FloatCounter = Counter<f64, AtomicU64>;

/// How a measurement is exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// Last observation wins.
    Gauge,
    /// Accumulated from a running total reported by the controller.
    Counter,
}

/// Static description of one exported measurement.
///
/// Several definitions may share a `name`; they then feed the same family and
/// differ only by their fixed `labels`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricDefinition {
    /// Metric name without namespace. Counter names omit the `_total` suffix,
    /// which the encoder appends.
    pub name: &'static str,
    pub help: &'static str,
    pub kind: MetricKind,
    /// Fixed label pairs, e.g. `[("phase", "1")]`.
    pub labels: &'static [(&'static str, &'static str)],
}

impl MetricDefinition {
    pub const fn gauge(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            help,
            kind: MetricKind::Gauge,
            labels: &[],
        }
    }

    pub const fn counter(name: &'static str, help: &'static str) -> Self {
        Self {
            name,
            help,
            kind: MetricKind::Counter,
            labels: &[],
        }
    }

    pub const fn with_labels(mut self, labels: &'static [(&'static str, &'static str)]) -> Self {
        self.labels = labels;
        self
    }

    /// Build the label set of the series identified by a component.
    pub fn series_labels(&self, component_type: &str, component_id: &str) -> SeriesLabels {
        let mut labels = Vec::with_capacity(2 + self.labels.len());
        labels.push((COMPONENT_TYPE_LABEL.to_string(), component_type.to_string()));
        labels.push((COMPONENT_ID_LABEL.to_string(), component_id.to_string()));
        labels.extend(
            self.labels
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        labels
    }
}

/// Labels of the per-connection health series.
#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct ClientLabels {
    pub client_id: String,
}

impl ClientLabels {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
        }
    }
}

/// Operational series describing the exporter itself.
#[derive(Debug, Clone, Default)]
pub struct OperationalMetrics {
    /// 0=Disconnected; 1=Connected.
    pub connection_state: Family<ClientLabels, Gauge>,
    /// Unix time of the last connection state change.
    pub connection_state_since: Family<ClientLabels, Gauge>,
    /// Inbound updates processed.
    pub updates: Counter,
    /// Inbound updates dropped without touching a measurement.
    pub updates_ignored: Counter,
}

/// Owns the Prometheus registry and every exported family.
#[derive(Debug)]
pub struct MetricRegistry {
    registry: Registry,
    gauges: HashMap<&'static str, Family<SeriesLabels, FloatGauge>>,
    counters: HashMap<&'static str, Family<SeriesLabels, FloatCounter>>,
    operational: OperationalMetrics,
}

impl MetricRegistry {
    /// Register one family per distinct definition name plus the operational series.
    ///
    /// The help text of the first definition of a name is used. A name defined
    /// with both kinds keeps the first kind; the conflicting definitions are
    /// dropped from the export.
    pub fn new<'a>(definitions: impl IntoIterator<Item = &'a MetricDefinition>) -> Self {
        let mut registry = Registry::with_prefix(NAMESPACE);
        let mut gauges: HashMap<&'static str, Family<SeriesLabels, FloatGauge>> = HashMap::new();
        let mut counters: HashMap<&'static str, Family<SeriesLabels, FloatCounter>> =
            HashMap::new();

        for definition in definitions {
            let name = definition.name;
            match definition.kind {
                MetricKind::Gauge => {
                    if gauges.contains_key(name) {
                        continue;
                    }
                    if counters.contains_key(name) {
                        warn!(metric = name, "Metric already registered as counter");
                        continue;
                    }
                    let family = Family::<SeriesLabels, FloatGauge>::default();
                    registry.register(name, definition.help, family.clone());
                    gauges.insert(name, family);
                }
                MetricKind::Counter => {
                    if counters.contains_key(name) {
                        continue;
                    }
                    if gauges.contains_key(name) {
                        warn!(metric = name, "Metric already registered as gauge");
                        continue;
                    }
                    let family = Family::<SeriesLabels, FloatCounter>::default();
                    registry.register(name, definition.help, family.clone());
                    counters.insert(name, family);
                }
            }
        }

        let operational = OperationalMetrics::default();
        registry.register(
            "mqtt_connection_state",
            "0=Disconnected; 1=Connected",
            operational.connection_state.clone(),
        );
        registry.register(
            "mqtt_connection_state_since_time_seconds",
            "Time since last change to mqtt_connection_state",
            operational.connection_state_since.clone(),
        );
        registry.register(
            "mqtt_subscription_updates",
            "MQTT subscription updates received",
            operational.updates.clone(),
        );
        registry.register(
            "mqtt_subscription_updates_ignored",
            "MQTT subscription updates ignored",
            operational.updates_ignored.clone(),
        );

        Self {
            registry,
            gauges,
            counters,
            operational,
        }
    }

    /// Gauge family registered under `name`.
    pub fn gauge(&self, name: &str) -> Option<&Family<SeriesLabels, FloatGauge>> {
        self.gauges.get(name)
    }

    /// Counter family registered under `name`.
    pub fn counter(&self, name: &str) -> Option<&Family<SeriesLabels, FloatCounter>> {
        self.counters.get(name)
    }

    /// Operational series handles.
    pub fn operational(&self) -> &OperationalMetrics {
        &self.operational
    }

    /// Number of measurement families (operational series excluded).
    pub fn family_count(&self) -> usize {
        self.gauges.len() + self.counters.len()
    }

    /// Render all metrics in the OpenMetrics text exposition format.
    pub fn render(&self) -> Result<String, std::fmt::Error> {
        let mut output = String::new();
        prometheus_client::encoding::text::encode(&mut output, &self.registry)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static DEFINITIONS: &[MetricDefinition] = &[
        MetricDefinition::gauge("ac_phase_power_watts", "W").with_labels(&[("phase", "1")]),
        MetricDefinition::gauge("ac_phase_power_watts", "W").with_labels(&[("phase", "2")]),
        MetricDefinition::counter("time_off_seconds", "Time spent off"),
        MetricDefinition::gauge("time_off_seconds", "Conflicting kind"),
    ];

    #[test]
    fn test_series_labels() {
        let labels = DEFINITIONS[1].series_labels("grid", "30");

        assert_eq!(
            labels,
            vec![
                ("component_type".to_string(), "grid".to_string()),
                ("component_id".to_string(), "30".to_string()),
                ("phase".to_string(), "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_shared_family_registered_once() {
        let registry = MetricRegistry::new(DEFINITIONS);

        assert_eq!(registry.family_count(), 2);
        assert!(registry.gauge("ac_phase_power_watts").is_some());
        assert!(registry.counter("time_off_seconds").is_some());
        assert!(registry.gauge("time_off_seconds").is_none());
    }

    #[test]
    fn test_render_contains_namespace_and_labels() {
        let registry = MetricRegistry::new(DEFINITIONS);
        let family = registry.gauge("ac_phase_power_watts").unwrap();
        family
            .get_or_create(&DEFINITIONS[0].series_labels("grid", "30"))
            .set(1234.5);

        let output = registry.render().unwrap();

        assert!(output.contains("# TYPE victron_ac_phase_power_watts gauge"));
        assert!(output.contains("component_type=\"grid\""));
        assert!(output.contains("phase=\"1\""));
        assert!(output.contains("1234.5"));
        assert!(output.contains("victron_mqtt_subscription_updates_total"));
        assert!(output.contains("victron_mqtt_subscription_updates_ignored_total"));
    }

    #[test]
    fn test_counter_rendered_with_total_suffix() {
        let registry = MetricRegistry::new(DEFINITIONS);
        registry
            .counter("time_off_seconds")
            .unwrap()
            .get_or_create(&DEFINITIONS[2].series_labels("vebus", "276"))
            .inc_by(42.0);

        let output = registry.render().unwrap();

        assert!(output.contains("# TYPE victron_time_off_seconds counter"));
        assert!(output.contains("victron_time_off_seconds_total{"));
    }
}
