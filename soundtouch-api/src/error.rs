use http_client::TransportError;
use soundtouch_parser::ParseError;
use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by every [`SoundTouchClient`](crate::SoundTouchClient) operation
///
/// A failed call yields exactly one of these. `InvalidParameter` is raised
/// before any request is built and signals caller misuse; the three network
/// kinds come from the transport; `ParseError` means the device answered
/// with a body this library does not understand.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A precondition on an argument failed; no request was sent
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ValidationError),

    /// The device is unreachable, or the exchange failed without a more
    /// specific classification
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The configured timeout elapsed before the device answered
    #[error("Timeout error: {0}")]
    TimeoutError(String),

    /// The device returned a structured error payload
    #[error("Device error: {0}")]
    DeviceError(DeviceError),

    /// The response body is malformed or does not match the expected record
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
}

/// Error payload reported by the device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceError {
    /// Symbolic error name, e.g. `CLIENT_XML_ERROR`
    pub name: String,
    /// Numeric error code
    pub code: i64,
    /// Free-form message, when the device sent one
    pub message: Option<String>,
}

impl std::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message.as_deref().filter(|m| !m.is_empty()) {
            Some(message) => f.write_str(message),
            None => write!(f, "{} (code {})", self.name, self.code),
        }
    }
}

impl ApiError {
    /// True when the call was rejected locally without any network I/O
    pub fn is_validation(&self) -> bool {
        matches!(self, ApiError::InvalidParameter(_))
    }

    /// Error name of a device error
    pub fn error_name(&self) -> Option<&str> {
        match self {
            ApiError::DeviceError(e) => Some(&e.name),
            _ => None,
        }
    }

    /// Error code of a device error
    pub fn error_code(&self) -> Option<i64> {
        match self {
            ApiError::DeviceError(e) => Some(e.code),
            _ => None,
        }
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Connection(msg) => ApiError::ConnectionError(msg),
            TransportError::Timeout(msg) => ApiError::TimeoutError(msg),
            TransportError::Device { name, code, message } => {
                ApiError::DeviceError(DeviceError { name, code, message })
            }
        }
    }
}
