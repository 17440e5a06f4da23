//! Error types for XML decoding operations

use thiserror::Error;

/// Errors that can occur while decoding a device response
///
/// These indicate a response contract violation: the device answered, but
/// what it sent is not a payload this library understands.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The body is not well-formed XML
    #[error("Malformed XML: {0}")]
    MalformedXml(String),

    /// A field required by the typed record is absent
    #[error("Missing required element: {0}")]
    MissingRequiredElement(String),

    /// A field is present but its text cannot be coerced to the expected type
    #[error("Invalid value '{value}' for element '{field}': expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: &'static str,
    },

    /// The document root is not the element the endpoint is documented to return
    #[error("Unexpected root element: expected <{expected}>, found <{found}>")]
    UnexpectedRoot { expected: String, found: String },
}

/// Result type alias for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
