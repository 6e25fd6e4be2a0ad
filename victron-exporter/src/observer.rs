//! Gauge and counter semantics applied to routed measurements.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::registry::{MetricDefinition, MetricKind, MetricRegistry, SeriesLabels};

/// Identifies one accumulated series: metric name plus full label set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SeriesKey {
    name: &'static str,
    labels: SeriesLabels,
}

/// Last running total reported for a counter series.
#[derive(Debug, Clone, Copy)]
struct CounterBaseline {
    previous: f64,
}

/// Result of applying one observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Observation {
    /// A gauge was set to the value.
    Set(f64),
    /// First observation of a counter series; recorded as baseline only.
    Baseline,
    /// A counter series advanced by the delta.
    Advanced(f64),
    /// The running total went backwards (or was NaN); baseline moved, nothing added.
    Reset,
    /// The definition has no registered family.
    Unregistered,
}

/// Applies gauge and counter semantics to the registry.
///
/// Counter accumulation for all series is serialized through one mutex held
/// across the read-modify-write of the baseline and the counter increment.
#[derive(Debug)]
pub struct Observer {
    registry: Arc<MetricRegistry>,
    baselines: Mutex<HashMap<SeriesKey, CounterBaseline>>,
}

impl Observer {
    pub fn new(registry: Arc<MetricRegistry>) -> Self {
        Self {
            registry,
            baselines: Mutex::new(HashMap::new()),
        }
    }

    /// Dispatch an observation according to the definition's kind.
    pub fn observe(
        &self,
        definition: &'static MetricDefinition,
        component_type: &str,
        component_id: &str,
        value: f64,
    ) -> Observation {
        match definition.kind {
            MetricKind::Gauge => self.set(definition, component_type, component_id, value),
            MetricKind::Counter => {
                self.accumulate(definition, component_type, component_id, value)
            }
        }
    }

    /// Overwrite the gauge value, NaN included.
    pub fn set(
        &self,
        definition: &'static MetricDefinition,
        component_type: &str,
        component_id: &str,
        value: f64,
    ) -> Observation {
        let Some(family) = self.registry.gauge(definition.name) else {
            return Observation::Unregistered;
        };

        let labels = definition.series_labels(component_type, component_id);
        family.get_or_create(&labels).set(value);
        Observation::Set(value)
    }

    /// Fold a reported running total into the exported counter.
    pub fn accumulate(
        &self,
        definition: &'static MetricDefinition,
        component_type: &str,
        component_id: &str,
        value: f64,
    ) -> Observation {
        let Some(family) = self.registry.counter(definition.name) else {
            return Observation::Unregistered;
        };

        let labels = definition.series_labels(component_type, component_id);
        let mut baselines = self.baselines.lock();

        let key = SeriesKey {
            name: definition.name,
            labels,
        };

        let Some(baseline) = baselines.get_mut(&key) else {
            // Create the series so it is exported at zero from the first sighting.
            family.get_or_create(&key.labels);
            trace!(metric = definition.name, value, "Counter baseline recorded");
            baselines.insert(key, CounterBaseline { previous: value });
            return Observation::Baseline;
        };

        let delta = value - baseline.previous;
        baseline.previous = value;

        if delta >= 0.0 {
            family.get_or_create(&key.labels).inc_by(delta);
            Observation::Advanced(delta)
        } else {
            debug!(
                metric = definition.name,
                component_type,
                component_id,
                value,
                "Counter source went backwards, rebasing"
            );
            Observation::Reset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TIME_ON_GRID: MetricDefinition =
        MetricDefinition::counter("time_on_grid_seconds", "Time spent on grid");
    static SOC: MetricDefinition = MetricDefinition::gauge("state_of_charge", "");
    static UNREGISTERED: MetricDefinition = MetricDefinition::gauge("not_registered", "");

    fn setup() -> (Arc<MetricRegistry>, Observer) {
        let registry = Arc::new(MetricRegistry::new([&TIME_ON_GRID, &SOC]));
        let observer = Observer::new(registry.clone());
        (registry, observer)
    }

    fn gauge_value(registry: &MetricRegistry, component_id: &str) -> f64 {
        registry
            .gauge(SOC.name)
            .unwrap()
            .get_or_create(&SOC.series_labels("battery", component_id))
            .get()
    }

    fn counter_value(registry: &MetricRegistry, component_id: &str) -> f64 {
        registry
            .counter(TIME_ON_GRID.name)
            .unwrap()
            .get_or_create(&TIME_ON_GRID.series_labels("vebus", component_id))
            .get()
    }

    #[test]
    fn test_gauge_last_value_wins() {
        let (registry, observer) = setup();

        observer.observe(&SOC, "battery", "512", 80.0);
        observer.observe(&SOC, "battery", "512", 79.5);

        assert_eq!(gauge_value(&registry, "512"), 79.5);
    }

    #[test]
    fn test_gauge_idempotent() {
        let (registry, observer) = setup();

        observer.observe(&SOC, "battery", "512", 42.0);
        let once = gauge_value(&registry, "512");
        observer.observe(&SOC, "battery", "512", 42.0);

        assert_eq!(gauge_value(&registry, "512"), once);
    }

    #[test]
    fn test_gauge_nan_overwrites() {
        let (registry, observer) = setup();

        observer.observe(&SOC, "battery", "512", 80.0);
        observer.observe(&SOC, "battery", "512", f64::NAN);

        assert!(gauge_value(&registry, "512").is_nan());
    }

    #[test]
    fn test_gauge_series_per_component() {
        let (registry, observer) = setup();

        observer.observe(&SOC, "battery", "512", 80.0);
        observer.observe(&SOC, "battery", "513", 20.0);

        assert_eq!(gauge_value(&registry, "512"), 80.0);
        assert_eq!(gauge_value(&registry, "513"), 20.0);
    }

    #[test]
    fn test_counter_first_observation_is_baseline() {
        let (registry, observer) = setup();

        assert_eq!(
            observer.observe(&TIME_ON_GRID, "vebus", "276", 5000.0),
            Observation::Baseline
        );
        assert_eq!(counter_value(&registry, "276"), 0.0);
    }

    #[test]
    fn test_counter_monotonic_sequence() {
        let (registry, observer) = setup();
        let totals = [100.0, 100.0, 130.0, 131.5, 200.0];

        let mut last = 0.0;
        for total in totals {
            observer.observe(&TIME_ON_GRID, "vebus", "276", total);
            let exported = counter_value(&registry, "276");
            assert!(exported >= last);
            last = exported;
        }

        assert_eq!(counter_value(&registry, "276"), 200.0 - 100.0);
    }

    #[test]
    fn test_counter_reset_absorbed() {
        let (registry, observer) = setup();

        assert_eq!(
            observer.observe(&TIME_ON_GRID, "vebus", "276", 10.0),
            Observation::Baseline
        );
        assert_eq!(
            observer.observe(&TIME_ON_GRID, "vebus", "276", 15.0),
            Observation::Advanced(5.0)
        );
        assert_eq!(counter_value(&registry, "276"), 5.0);

        assert_eq!(
            observer.observe(&TIME_ON_GRID, "vebus", "276", 3.0),
            Observation::Reset
        );
        assert_eq!(counter_value(&registry, "276"), 5.0);

        assert_eq!(
            observer.observe(&TIME_ON_GRID, "vebus", "276", 8.0),
            Observation::Advanced(5.0)
        );
        assert_eq!(counter_value(&registry, "276"), 10.0);
    }

    #[test]
    fn test_counter_nan_rebases() {
        let (registry, observer) = setup();

        observer.observe(&TIME_ON_GRID, "vebus", "276", 10.0);
        assert_eq!(
            observer.observe(&TIME_ON_GRID, "vebus", "276", f64::NAN),
            Observation::Reset
        );
        assert_eq!(
            observer.observe(&TIME_ON_GRID, "vebus", "276", 12.0),
            Observation::Reset
        );
        observer.observe(&TIME_ON_GRID, "vebus", "276", 20.0);

        assert_eq!(counter_value(&registry, "276"), 8.0);
    }

    #[test]
    fn test_counter_baselines_are_per_component() {
        let (registry, observer) = setup();

        observer.observe(&TIME_ON_GRID, "vebus", "276", 1000.0);
        observer.observe(&TIME_ON_GRID, "vebus", "277", 10.0);
        observer.observe(&TIME_ON_GRID, "vebus", "276", 1010.0);
        observer.observe(&TIME_ON_GRID, "vebus", "277", 13.0);

        assert_eq!(counter_value(&registry, "276"), 10.0);
        assert_eq!(counter_value(&registry, "277"), 3.0);
    }

    #[test]
    fn test_unregistered_definition() {
        let (_registry, observer) = setup();

        assert_eq!(
            observer.observe(&UNREGISTERED, "battery", "512", 1.0),
            Observation::Unregistered
        );
    }

    #[test]
    fn test_concurrent_accumulation() {
        let (registry, observer) = setup();
        let observer = Arc::new(observer);

        observer.observe(&TIME_ON_GRID, "vebus", "276", 0.0);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let observer = observer.clone();
                std::thread::spawn(move || {
                    for _ in 0..250 {
                        observer.observe(&TIME_ON_GRID, "vebus", "276", 7.0);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter_value(&registry, "276"), 7.0);
    }
}
