//! Exact-match routing from topic suffix to metric definition.

use std::collections::HashMap;

use tracing::warn;

use crate::registry::MetricDefinition;
use crate::topics::TOPIC_TABLE;

/// Static lookup table built once at startup.
#[derive(Debug, Clone)]
pub struct TopicRouter {
    table: &'static [(&'static str, MetricDefinition)],
    routes: HashMap<&'static str, &'static MetricDefinition>,
}

impl TopicRouter {
    /// Build a router from a suffix table. Later duplicates of a suffix are ignored.
    pub fn new(table: &'static [(&'static str, MetricDefinition)]) -> Self {
        let mut routes = HashMap::with_capacity(table.len());
        for (suffix, definition) in table {
            if routes.contains_key(suffix) {
                warn!(suffix, "Duplicate topic suffix in routing table");
                continue;
            }
            routes.insert(*suffix, definition);
        }
        Self { table, routes }
    }

    /// Router over the full Venus OS table.
    pub fn victron() -> Self {
        Self::new(TOPIC_TABLE)
    }

    /// Resolve a suffix. No wildcard or prefix matching.
    pub fn resolve(&self, suffix: &str) -> Option<&'static MetricDefinition> {
        self.routes.get(suffix).copied()
    }

    /// Definitions in table order.
    pub fn definitions(&self) -> impl Iterator<Item = &'static MetricDefinition> {
        self.table.iter().map(|(_, definition)| definition)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MetricKind;

    #[test]
    fn test_resolve_exact_suffix() {
        let router = TopicRouter::victron();

        let definition = router.resolve("Dc/Battery/Soc").unwrap();
        assert_eq!(definition.name, "dc_battery_state_of_charge");
        assert_eq!(definition.kind, MetricKind::Gauge);

        let definition = router.resolve("Ac/Grid/L2/Power").unwrap();
        assert_eq!(definition.name, "ac_grid_phase_power_watt");
        assert_eq!(definition.labels, &[("phase", "2")]);
    }

    #[test]
    fn test_resolve_counter() {
        let router = TopicRouter::victron();
        let definition = router.resolve("Timers/TimeOnGrid").unwrap();

        assert_eq!(definition.kind, MetricKind::Counter);
        assert_eq!(definition.name, "time_on_grid_seconds");
    }

    #[test]
    fn test_resolve_is_exact() {
        let router = TopicRouter::victron();

        assert!(router.resolve("Dc/Battery").is_none());
        assert!(router.resolve("Dc/Battery/Soc/Extra").is_none());
        assert!(router.resolve("dc/battery/soc").is_none());
        assert!(router.resolve("").is_none());
        assert!(router.resolve("Serial").is_none());
    }

    #[test]
    fn test_router_covers_table() {
        let router = TopicRouter::victron();
        assert_eq!(router.len(), TOPIC_TABLE.len());
        assert!(!router.is_empty());
    }
}
