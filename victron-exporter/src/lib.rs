//! Prometheus exporter for Victron Venus OS telemetry.
//!
//! This crate subscribes to the MQTT telemetry published by a GX device and
//! exposes it as Prometheus metrics via an HTTP `/metrics` endpoint.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐
//! │   MQTT broker   │────>│  Subscription   │────>│ Metric registry │
//! │ (N/<serial>/#)  │     │    handler      │     │   (/metrics)    │
//! └─────────────────┘     └─────────────────┘     └─────────────────┘
//!          ^                       │
//!          │              ┌─────────────────┐
//!          └──────────────│  Serial poller  │
//!       R/<serial>/...    └─────────────────┘
//! ```
//!
//! Each inbound topic is split into component type, component id and suffix.
//! The suffix is routed through a fixed table to a [`MetricDefinition`], and
//! the decoded value is applied as a gauge or folded into a counter.
//!
//! # Usage
//!
//! ```bash
//! victron-exporter --config config.json5
//! ```
//!
//! # Configuration
//!
//! See [`config::ExporterConfig`] for configuration options.

pub mod config;
pub mod handler;
pub mod health;
pub mod http;
pub mod identity;
pub mod observer;
pub mod poller;
pub mod registry;
pub mod router;
pub mod topics;
pub mod transport;

pub use config::ExporterConfig;
pub use handler::{Dispatch, HandlerStats, IgnoreReason, SubscriptionHandler};
pub use health::ConnectionHealth;
pub use http::HttpServer;
pub use identity::IdentityGate;
pub use observer::{Observation, Observer};
pub use poller::SerialPoller;
pub use registry::{MetricDefinition, MetricKind, MetricRegistry};
pub use router::TopicRouter;
pub use transport::MqttDriver;
