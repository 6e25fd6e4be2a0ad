//! Periodic serial request keeping the GX device publishing.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info, trace, warn};
use victron_common::serial_request_topic;

use crate::health::ConnectionHealth;
use crate::identity::IdentityGate;
use crate::transport::Publish;

/// Result of one poll tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Published { topic: String },
    SkippedDisconnected,
    SkippedNoSerial,
    Failed,
}

/// Publishes `R/<serial>/system/0/Serial` on a fixed interval.
pub struct SerialPoller {
    publisher: Arc<dyn Publish>,
    client_id: String,
    gate: Arc<IdentityGate>,
    health: Arc<ConnectionHealth>,
    interval: Duration,
}

impl SerialPoller {
    pub fn new(
        publisher: Arc<dyn Publish>,
        client_id: impl Into<String>,
        gate: Arc<IdentityGate>,
        health: Arc<ConnectionHealth>,
        interval: Duration,
    ) -> Self {
        Self {
            publisher,
            client_id: client_id.into(),
            gate,
            health,
            interval,
        }
    }

    /// Publish one request if the publishing connection is up and a serial is known.
    pub fn tick(&self) -> PollOutcome {
        if !self.health.is_connected(&self.client_id) {
            trace!(client_id = %self.client_id, "Publisher not connected, skipping poll");
            return PollOutcome::SkippedDisconnected;
        }

        let serial = self.gate.get();
        if serial.is_empty() {
            trace!("Serial not known yet, skipping poll");
            return PollOutcome::SkippedNoSerial;
        }

        let topic = serial_request_topic(serial);
        match self.publisher.publish(&topic, Vec::new()) {
            Ok(()) => {
                debug!(topic = %topic, "Requested serial");
                PollOutcome::Published { topic }
            }
            Err(e) => {
                warn!(topic = %topic, error = %e, "Failed to publish serial request");
                PollOutcome::Failed
            }
        }
    }

    /// Run until the shutdown signal is received.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut interval = tokio::time::interval(self.interval);
        info!(interval_secs = self.interval.as_secs(), "Serial poller started");

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.tick();
                }
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Serial poller stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::OperationalMetrics;
    use crate::transport::TransportError;
    use parking_lot::Mutex;

    const CLIENT_ID: &str = "victron_exporter_pub";

    #[derive(Default)]
    struct RecordingPublisher {
        published: Mutex<Vec<(String, Vec<u8>)>>,
        fail: bool,
    }

    impl Publish for RecordingPublisher {
        fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), TransportError> {
            if self.fail {
                return Err(TransportError::Io(std::io::Error::other("closed")));
            }
            self.published.lock().push((topic.to_string(), payload));
            Ok(())
        }
    }

    fn poller(publisher: Arc<RecordingPublisher>) -> (SerialPoller, Arc<IdentityGate>, Arc<ConnectionHealth>) {
        let gate = Arc::new(IdentityGate::new());
        let health = Arc::new(ConnectionHealth::new(&OperationalMetrics::default()));
        let poller = SerialPoller::new(
            publisher,
            CLIENT_ID,
            gate.clone(),
            health.clone(),
            Duration::from_secs(10),
        );
        (poller, gate, health)
    }

    #[test]
    fn test_skips_when_disconnected() {
        let publisher = Arc::new(RecordingPublisher::default());
        let (poller, gate, _health) = poller(publisher.clone());
        gate.try_latch("c0619ab1f2e3");

        assert_eq!(poller.tick(), PollOutcome::SkippedDisconnected);
        assert!(publisher.published.lock().is_empty());
    }

    #[test]
    fn test_skips_without_serial() {
        let publisher = Arc::new(RecordingPublisher::default());
        let (poller, _gate, health) = poller(publisher.clone());
        health.on_connected(CLIENT_ID);

        assert_eq!(poller.tick(), PollOutcome::SkippedNoSerial);
        assert!(publisher.published.lock().is_empty());
    }

    #[test]
    fn test_publishes_request() {
        let publisher = Arc::new(RecordingPublisher::default());
        let (poller, gate, health) = poller(publisher.clone());
        health.on_connected(CLIENT_ID);
        gate.try_latch("c0619ab1f2e3");

        assert_eq!(
            poller.tick(),
            PollOutcome::Published {
                topic: "R/c0619ab1f2e3/system/0/Serial".to_string()
            }
        );
        assert_eq!(
            *publisher.published.lock(),
            vec![("R/c0619ab1f2e3/system/0/Serial".to_string(), Vec::new())]
        );
    }

    #[test]
    fn test_publish_failure_reported() {
        let publisher = Arc::new(RecordingPublisher {
            fail: true,
            ..Default::default()
        });
        let (poller, gate, health) = poller(publisher);
        health.on_connected(CLIENT_ID);
        gate.try_latch("c0619ab1f2e3");

        assert_eq!(poller.tick(), PollOutcome::Failed);
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown() {
        let publisher = Arc::new(RecordingPublisher::default());
        let (poller, gate, health) = poller(publisher.clone());
        health.on_connected(CLIENT_ID);
        gate.try_latch("c0619ab1f2e3");

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(poller.run(shutdown_rx));

        // The first interval tick fires immediately.
        tokio::time::sleep(Duration::from_millis(50)).await;
        shutdown_tx.send(true).unwrap();
        tokio::time::timeout(Duration::from_secs(1), task)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(publisher.published.lock().len(), 1);
    }
}
