//! Coordinator options.

use std::time::Duration;

use crate::error::{Error, Result};

/// Options for the sync coordinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Upper bound on every remote API call. A call that takes longer is
    /// treated as the remote being unavailable.
    pub remote_timeout: Duration,
    /// Buffer size of the event channel.
    pub event_capacity: usize,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            remote_timeout: Duration::from_secs(10),
            event_capacity: 100,
        }
    }
}

impl SyncConfig {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the remote call timeout.
    pub fn remote_timeout(mut self, timeout: Duration) -> Self {
        self.remote_timeout = timeout;
        self
    }

    /// Set the event channel capacity.
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Validate the options and return an error if invalid.
    ///
    /// Checks that:
    /// - `remote_timeout` is > 0
    /// - `event_capacity` is > 0
    pub fn validate(&self) -> Result<()> {
        if self.remote_timeout.is_zero() {
            return Err(Error::invalid_config("remote_timeout must be > 0"));
        }
        if self.event_capacity == 0 {
            return Err(Error::invalid_config("event_capacity must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SyncConfig::default();
        assert_eq!(config.remote_timeout, Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let err = SyncConfig::new()
            .remote_timeout(Duration::ZERO)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = SyncConfig::new().event_capacity(0).validate().unwrap_err();
        assert!(err.to_string().contains("event_capacity"));
    }
}
