//! Connection parameters for a single device

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

/// Port of the SoundTouch Web API server
pub const DEFAULT_PORT: u16 = 8090;

/// Per-request timeout used when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how to reach a device
///
/// Fixed at client construction. Deserializes from e.g.
/// `{"host": "192.168.1.20", "timeout_secs": 2.5}`; `port` and
/// `timeout_secs` are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Host name or IP address of the speaker
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(
        rename = "timeout_secs",
        with = "duration_secs",
        default = "default_timeout"
    )]
    pub timeout: Duration,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout from fractional seconds
    ///
    /// # Errors
    ///
    /// Negative, NaN and infinite values are rejected.
    pub fn with_timeout_secs(self, secs: f64) -> Result<Self, ValidationError> {
        let timeout = Duration::try_from_secs_f64(secs)
            .map_err(|_| ValidationError::invalid_value("timeout", secs, "must be a finite, non-negative number of seconds"))?;
        Ok(self.with_timeout(timeout))
    }

    /// `http://host:port`
    pub fn base_url(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("http://[{}]:{}", self.host, self.port)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.host.trim().is_empty() {
            return Err(ValidationError::missing("host"));
        }
        if self.timeout.is_zero() {
            return Err(ValidationError::invalid_value("timeout", "0", "must be greater than zero"));
        }
        Ok(())
    }
}

mod duration_secs {
    use std::time::Duration;

    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("192.0.2.1");
        assert_eq!(config.port, 8090);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.base_url(), "http://192.0.2.1:8090");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::new("speaker.local")
            .with_port(8091)
            .with_timeout_secs(2.5)
            .unwrap();
        assert_eq!(config.base_url(), "http://speaker.local:8091");
        assert_eq!(config.timeout, Duration::from_millis(2500));
    }

    #[test]
    fn test_invalid_timeouts_are_rejected() {
        assert!(ClientConfig::new("h").with_timeout_secs(-1.0).is_err());
        assert!(ClientConfig::new("h").with_timeout_secs(f64::NAN).is_err());
        assert!(ClientConfig::new("h").with_timeout(Duration::ZERO).validate().is_err());
    }

    #[test]
    fn test_empty_host_is_rejected() {
        assert_eq!(
            ClientConfig::new("  ").validate(),
            Err(ValidationError::missing("host"))
        );
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"host": "192.0.2.7"}"#).unwrap();
        assert_eq!(config, ClientConfig::new("192.0.2.7"));

        let config: ClientConfig =
            serde_json::from_str(r#"{"host": "192.0.2.7", "port": 9000, "timeout_secs": 0.5}"#).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_ipv6_base_url() {
        assert_eq!(ClientConfig::new("fe80::1").base_url(), "http://[fe80::1]:8090");
    }
}
