//! MQTT transport: client options, the event loop driver and reconnect backoff.

use std::sync::Arc;
use std::time::Duration;

use rumqttc::{AsyncClient, ClientError, Event, EventLoop, MqttOptions, Packet, QoS, Transport};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, trace, warn};
use victron_common::MqttConfig;

/// Capacity of the request channel between a client handle and its event loop.
const REQUEST_CHANNEL_CAPACITY: usize = 64;

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("MQTT client error: {0}")]
    Client(#[from] ClientError),
    #[error("Failed to read CA file: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that can issue a subscription.
pub trait Subscribe: Send + Sync {
    fn subscribe(&self, topic: &str) -> Result<(), TransportError>;
}

/// Something that can publish a message.
pub trait Publish: Send + Sync {
    fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), TransportError>;
}

impl Subscribe for AsyncClient {
    fn subscribe(&self, topic: &str) -> Result<(), TransportError> {
        self.try_subscribe(topic, QoS::AtMostOnce)?;
        Ok(())
    }
}

impl Publish for AsyncClient {
    fn publish(&self, topic: &str, payload: Vec<u8>) -> Result<(), TransportError> {
        self.try_publish(topic, QoS::AtLeastOnce, false, payload)?;
        Ok(())
    }
}

/// Callbacks invoked by [`MqttDriver`] for connection lifecycle and inbound messages.
pub trait ConnectionHandler: Send + Sync {
    fn on_connect(&self, client_id: &str, client: &dyn Subscribe);
    fn on_disconnect(&self, client_id: &str);
    fn on_message(&self, topic: &str, payload: &[u8]);
}

/// Shortest delay between reconnect attempts.
const MIN_BACKOFF: Duration = Duration::from_secs(1);

/// Capped exponential backoff. Delays never drop below one second.
#[derive(Debug, Clone)]
pub struct Backoff {
    initial: Duration,
    max: Duration,
    current: Duration,
}

impl Backoff {
    pub fn new(initial: Duration, max: Duration) -> Self {
        let max = max.max(MIN_BACKOFF);
        let initial = initial.clamp(MIN_BACKOFF, max);
        Self {
            initial,
            max,
            current: initial,
        }
    }

    /// Delay to wait now; doubles the following one up to the cap.
    pub fn next_delay(&mut self) -> Duration {
        let delay = self.current;
        self.current = (self.current * 2).min(self.max);
        delay
    }

    pub fn reset(&mut self) {
        self.current = self.initial;
    }
}

/// Build client options for one logical connection.
pub fn mqtt_options(config: &MqttConfig, client_id: &str) -> Result<MqttOptions, TransportError> {
    let mut options = MqttOptions::new(client_id, &config.host, config.port);
    options.set_keep_alive(Duration::from_secs(config.keep_alive_secs));
    options.set_clean_session(true);

    if let Some(username) = &config.username {
        options.set_credentials(username, config.password.as_deref().unwrap_or_default());
    }

    if config.secure {
        let transport = match &config.ca_file {
            Some(path) => Transport::tls(std::fs::read(path)?, None, None),
            None => Transport::tls_with_default_config(),
        };
        options.set_transport(transport);
    }

    Ok(options)
}

/// Drives one MQTT connection: polls the event loop, reports lifecycle
/// transitions and reconnects with backoff after errors.
pub struct MqttDriver {
    client_id: String,
    client: AsyncClient,
    eventloop: EventLoop,
    backoff: Backoff,
}

impl MqttDriver {
    pub fn new(config: &MqttConfig, client_id: impl Into<String>) -> Result<Self, TransportError> {
        let client_id = client_id.into();
        let options = mqtt_options(config, &client_id)?;
        let (client, eventloop) = AsyncClient::new(options, REQUEST_CHANNEL_CAPACITY);

        Ok(Self {
            client_id,
            client,
            eventloop,
            backoff: Backoff::new(
                Duration::from_secs(config.reconnect_delay_secs),
                Duration::from_secs(config.max_reconnect_delay_secs),
            ),
        })
    }

    /// Handle for issuing requests on this connection.
    pub fn client(&self) -> AsyncClient {
        self.client.clone()
    }

    /// Run until the shutdown signal is received.
    pub async fn run(self, handler: Arc<dyn ConnectionHandler>, mut shutdown: watch::Receiver<bool>) {
        let Self {
            client_id,
            client,
            mut eventloop,
            mut backoff,
        } = self;
        let mut connected = false;

        info!(client_id = %client_id, "Connecting to MQTT broker");

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!(client_id = %client_id, "Shutdown signal received, stopping MQTT driver");
                        break;
                    }
                }

                event = eventloop.poll() => {
                    match event {
                        Ok(Event::Incoming(Packet::ConnAck(_))) => {
                            connected = true;
                            backoff.reset();
                            handler.on_connect(&client_id, &client);
                        }
                        Ok(Event::Incoming(Packet::Publish(publish))) => {
                            handler.on_message(&publish.topic, &publish.payload);
                        }
                        Ok(Event::Incoming(Packet::Disconnect)) => {
                            debug!(client_id = %client_id, "Broker sent disconnect");
                            if connected {
                                connected = false;
                                handler.on_disconnect(&client_id);
                            }
                        }
                        Ok(event) => {
                            trace!(client_id = %client_id, ?event, "MQTT event");
                        }
                        Err(e) => {
                            if connected {
                                connected = false;
                                handler.on_disconnect(&client_id);
                            }

                            let delay = backoff.next_delay();
                            warn!(
                                client_id = %client_id,
                                error = %e,
                                retry_in_secs = delay.as_secs(),
                                "MQTT connection error"
                            );

                            tokio::select! {
                                _ = tokio::time::sleep(delay) => {}
                                _ = shutdown.changed() => {
                                    if *shutdown.borrow() {
                                        break;
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if connected {
            if let Err(e) = client.try_disconnect() {
                debug!(client_id = %client_id, error = %e, "Failed to send disconnect");
            }
            handler.on_disconnect(&client_id);
        }

        info!(client_id = %client_id, "MQTT driver stopped");
    }
}
