//! Typed records built from decoded responses
//!
//! All records are plain values: built fresh from one response and owned by
//! the caller afterwards.

mod audio;
mod content;
mod device;
mod playback;

pub use audio::{Bass, BassCapabilities, Tone, Volume};
pub use content::{ContentItem, Preset, SourceItem, PRESET_SLOTS};
pub use device::{Capability, Component, DeviceInfo, NetworkInfo};
pub use playback::{NowPlaying, PlayStatus, PlaybackTime};

pub(crate) use content::{presets_from_node, sources_from_node};
pub(crate) use device::capabilities_from_node;
pub(crate) use audio::{BASS_RANGE, VOLUME_RANGE};
