//! Venus OS MQTT topic layout.
//!
//! Topics follow `<class>/<portal_id>/<component_type>/<component_id>/<path...>`,
//! e.g. `N/c0619ab1f2e3/battery/512/Dc/0/Voltage`.

/// Topic suffix carrying the system serial (portal id).
pub const SERIAL_SUFFIX: &str = "Serial";

/// Minimum number of slash-separated segments of a routable topic.
pub const MIN_TOPIC_SEGMENTS: usize = 5;

/// Parsed components of a Venus OS telemetry topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTopic<'a> {
    /// Message class, e.g. `N` for notifications.
    pub class: &'a str,
    /// Portal id segment.
    pub portal_id: &'a str,
    pub component_type: &'a str,
    pub component_id: &'a str,
    /// Remaining segments joined by `/`, e.g. `Dc/0/Voltage`.
    pub suffix: &'a str,
}

impl ParsedTopic<'_> {
    /// Whether this topic reports the system serial.
    pub fn is_serial(&self) -> bool {
        self.suffix == SERIAL_SUFFIX
    }
}

/// Parse a topic into its components.
///
/// Returns `None` when the topic has fewer than [`MIN_TOPIC_SEGMENTS`] segments.
///
/// # Example
/// ```
/// use victron_common::topic::parse_topic;
///
/// let parsed = parse_topic("N/c0619ab1f2e3/battery/512/Dc/0/Voltage").unwrap();
/// assert_eq!(parsed.component_type, "battery");
/// assert_eq!(parsed.component_id, "512");
/// assert_eq!(parsed.suffix, "Dc/0/Voltage");
/// ```
pub fn parse_topic(topic: &str) -> Option<ParsedTopic<'_>> {
    let mut parts = topic.splitn(MIN_TOPIC_SEGMENTS, '/');

    let class = parts.next()?;
    let portal_id = parts.next()?;
    let component_type = parts.next()?;
    let component_id = parts.next()?;
    let suffix = parts.next()?;

    Some(ParsedTopic {
        class,
        portal_id,
        component_type,
        component_id,
        suffix,
    })
}

/// Build the request topic asking the controller to re-announce its serial.
///
/// # Example
/// ```
/// use victron_common::topic::serial_request_topic;
///
/// assert_eq!(serial_request_topic("c0619ab1f2e3"), "R/c0619ab1f2e3/system/0/Serial");
/// ```
pub fn serial_request_topic(serial: &str) -> String {
    format!("R/{}/system/0/{}", serial, SERIAL_SUFFIX)
}
