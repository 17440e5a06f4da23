//! # soundtouch-parser
//!
//! XML codec for the SoundTouch Web API.
//!
//! Responses decode into a schema-less value tree ([`XmlValue`] / [`XmlNode`])
//! in which attributes and child elements share one flat dictionary per
//! element. Because a single occurrence of a repeatable element is
//! indistinguishable from a scalar, callers normalize the fields they know
//! to be sequences right after decoding:
//!
//! ```rust
//! use soundtouch_parser::parse;
//!
//! let doc = parse(r#"<sources><sourceItem source="AUX">AUX IN</sourceItem></sources>"#)?
//!     .normalize(&["sourceItem"]);
//! assert_eq!(doc.node.list("sourceItem").len(), 1);
//! # Ok::<(), soundtouch_parser::ParseError>(())
//! ```
//!
//! Request bodies are built with [`XmlFragment`], which escapes every
//! interpolated string.

pub mod decode;
pub mod encode;
pub mod error;
pub mod value;

pub use decode::{normalize_sequences, parse, XmlDocument};
pub use encode::{escape, XmlFragment};
pub use error::{ParseError, ParseResult};
pub use value::{XmlNode, XmlValue, TEXT_KEY};
