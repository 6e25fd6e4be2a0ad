//! Write-once holder of the system serial.

use std::sync::OnceLock;

use tracing::info;

/// Latches the first non-empty serial seen and keeps it for the process lifetime.
#[derive(Debug, Default)]
pub struct IdentityGate {
    serial: OnceLock<String>,
}

impl IdentityGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `candidate` if the gate is still empty and `candidate` is non-empty.
    ///
    /// Returns `true` only for the call that latched the value.
    pub fn try_latch(&self, candidate: &str) -> bool {
        if candidate.is_empty() || self.serial.get().is_some() {
            return false;
        }

        let latched = self.serial.set(candidate.to_string()).is_ok();
        if latched {
            info!(serial = candidate, "Latched system serial");
        }
        latched
    }

    /// Latched serial, or an empty string.
    pub fn get(&self) -> &str {
        self.serial.get().map(String::as_str).unwrap_or_default()
    }

    pub fn is_latched(&self) -> bool {
        self.serial.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_empty_gate() {
        let gate = IdentityGate::new();
        assert!(!gate.is_latched());
        assert_eq!(gate.get(), "");
    }

    #[test]
    fn test_latch_once() {
        let gate = IdentityGate::new();

        assert!(gate.try_latch("A"));
        assert!(!gate.try_latch("B"));
        assert!(!gate.try_latch(""));

        assert!(gate.is_latched());
        assert_eq!(gate.get(), "A");
    }

    #[test]
    fn test_empty_candidate_does_not_latch() {
        let gate = IdentityGate::new();

        assert!(!gate.try_latch(""));
        assert!(!gate.is_latched());
        assert!(gate.try_latch("c0619ab1f2e3"));
        assert_eq!(gate.get(), "c0619ab1f2e3");
    }

    #[test]
    fn test_concurrent_latch_single_winner() {
        let gate = Arc::new(IdentityGate::new());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let gate = gate.clone();
                std::thread::spawn(move || gate.try_latch(&format!("serial-{}", i)))
            })
            .collect();
        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|latched| *latched)
            .count();

        assert_eq!(winners, 1);
        assert!(gate.get().starts_with("serial-"));
    }
}
