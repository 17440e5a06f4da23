//! # SoundTouch API
//!
//! Async client for the local web API of Bose SoundTouch speakers.
//!
//! Each [`SoundTouchClient`] talks to one device over HTTP (port 8090 by
//! default). Queries return typed records decoded from the device's XML;
//! commands validate their arguments before anything is sent.
//!
//! ```rust,no_run
//! use soundtouch_api::{Key, SoundTouchClient};
//!
//! # async fn run() -> soundtouch_api::Result<()> {
//! let client = SoundTouchClient::new("192.168.1.20")?;
//!
//! let now_playing = client.get_now_playing().await?;
//! if now_playing.is_standby() {
//!     client.press_key(Key::Power).await?;
//! }
//!
//! client.select_preset(1).await?;
//! client.set_volume(30).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`ApiError`]. Argument checks fail with
//! [`ApiError::InvalidParameter`] and never reach the network; otherwise a
//! failure is a connection error, a timeout, a device-reported error or a
//! malformed response.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod key;
pub mod logging;
pub mod model;
pub mod validation;

mod client;

pub use client::SoundTouchClient;
pub use config::{ClientConfig, DEFAULT_PORT, DEFAULT_TIMEOUT};
pub use endpoint::Endpoint;
pub use error::{ApiError, DeviceError, Result};
pub use key::{Key, RepeatMode};
pub use model::{
    Bass, BassCapabilities, Capability, Component, ContentItem, DeviceInfo, NetworkInfo, NowPlaying,
    PlayStatus, PlaybackTime, Preset, SourceItem, Tone, Volume,
};
pub use validation::ValidationError;

// Transport seam, for running the client against a stub
pub use http_client::{Transport, TransportError};
pub use soundtouch_parser::{XmlNode, XmlValue};
