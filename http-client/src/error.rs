//! Error types for the HTTP transport

use thiserror::Error;

/// Network and protocol failures of a single round trip
///
/// Every failed request maps to exactly one of these kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The device could not be reached, or the exchange failed in a way
    /// that has no more specific classification
    #[error("Connection error: {0}")]
    Connection(String),

    /// The configured timeout elapsed before a response arrived
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The device answered with a structured error payload
    #[error("Device error: {}", describe(.name, .code, .message))]
    Device {
        name: String,
        code: i64,
        message: Option<String>,
    },
}

impl TransportError {
    /// Human-readable description of a device error
    ///
    /// Uses the device's own message when it sent one, otherwise combines
    /// the error name and code. Returns `None` for the other kinds.
    pub fn device_message(&self) -> Option<String> {
        match self {
            TransportError::Device { name, code, message } => Some(describe(name, code, message)),
            _ => None,
        }
    }
}

fn describe(name: &str, code: &i64, message: &Option<String>) -> String {
    match message.as_deref().filter(|m| !m.is_empty()) {
        Some(message) => message.to_string(),
        None => format!("{} (code {})", name, code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_error_display_prefers_message() {
        let error = TransportError::Device {
            name: "CLIENT_XML_ERROR".to_string(),
            code: 1019,
            message: Some("Invalid key".to_string()),
        };
        assert_eq!(error.to_string(), "Device error: Invalid key");
    }

    #[test]
    fn test_device_error_display_falls_back_to_name_and_code() {
        let error = TransportError::Device {
            name: "X".to_string(),
            code: 5,
            message: None,
        };
        assert_eq!(error.to_string(), "Device error: X (code 5)");
        assert_eq!(error.device_message().as_deref(), Some("X (code 5)"));
    }

    #[test]
    fn test_other_kinds_have_no_device_message() {
        assert_eq!(TransportError::Timeout("t".to_string()).device_message(), None);
        assert_eq!(
            TransportError::Connection("refused".to_string()).to_string(),
            "Connection error: refused"
        );
    }
}
