use std::sync::Arc;

use http_client::{HttpTransport, Transport};
use soundtouch_parser::{XmlFragment, XmlNode};
use tracing::debug;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::key::{Key, RepeatMode, KEY_SENDER};
use crate::model::{
    capabilities_from_node, presets_from_node, sources_from_node, Bass, BassCapabilities, Capability,
    DeviceInfo, NowPlaying, Preset, SourceItem, Tone, Volume, BASS_RANGE, VOLUME_RANGE,
};
use crate::validation::{check_range, ValidationError};
use crate::Result;

/// A client for one SoundTouch device
///
/// Every operation is an independent round trip against the device's web
/// server; nothing is cached between calls. The client is cheap to clone and
/// can be shared between tasks.
///
/// ```rust,no_run
/// use soundtouch_api::SoundTouchClient;
///
/// # async fn run() -> soundtouch_api::Result<()> {
/// let client = SoundTouchClient::new("192.168.1.20")?;
/// client.set_volume(25).await?;
/// let volume = client.get_volume().await?;
/// println!("volume is {}", volume.actual_volume);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SoundTouchClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl SoundTouchClient {
    /// Create a client for `host` with the default port and timeout
    pub fn new(host: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(host))
    }

    /// Create a client from an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns [`crate::ApiError::InvalidParameter`] for an empty host or a zero
    /// timeout, and [`crate::ApiError::ConnectionError`] if the HTTP client cannot
    /// be built.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(&config.host, config.port, config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }

    /// Create a client that issues its requests through `transport`
    ///
    /// Used to run the client against a stub; `config` is kept for reference
    /// only.
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config,
            transport: Arc::new(transport),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> String {
        self.config.base_url()
    }

    /// GET an endpoint and return its normalized value tree
    ///
    /// Repeatable fields of the endpoint are always lists in the result.
    /// Useful for fields the typed records do not expose.
    pub async fn fetch_raw(&self, endpoint: Endpoint) -> Result<XmlNode> {
        let root = endpoint.response_root().ok_or_else(|| {
            ValidationError::invalid_value("endpoint", endpoint.path(), "endpoint does not support GET")
        })?;

        let body = self.transport.get(endpoint.path()).await?;
        let document = soundtouch_parser::parse(&body)?;
        document.expect_root(root)?;

        Ok(document.normalize(endpoint.repeated_fields()).into_node())
    }

    async fn send(&self, endpoint: Endpoint, body: XmlFragment) -> Result<()> {
        let body = body.to_string();
        debug!(path = endpoint.path(), %body, "sending command");
        self.transport.post(endpoint.path(), Some(&body)).await?;
        Ok(())
    }

    // Queries

    pub async fn get_info(&self) -> Result<DeviceInfo> {
        let node = self.fetch_raw(Endpoint::Info).await?;
        Ok(DeviceInfo::from_node(&node)?)
    }

    pub async fn get_capabilities(&self) -> Result<Vec<Capability>> {
        let node = self.fetch_raw(Endpoint::Capabilities).await?;
        Ok(capabilities_from_node(&node)?)
    }

    pub async fn get_now_playing(&self) -> Result<NowPlaying> {
        let node = self.fetch_raw(Endpoint::NowPlaying).await?;
        Ok(NowPlaying::from_node(&node)?)
    }

    pub async fn get_sources(&self) -> Result<Vec<SourceItem>> {
        let node = self.fetch_raw(Endpoint::Sources).await?;
        Ok(sources_from_node(&node)?)
    }

    pub async fn get_volume(&self) -> Result<Volume> {
        let node = self.fetch_raw(Endpoint::Volume).await?;
        Ok(Volume::from_node(&node)?)
    }

    /// All six preset slots, ordered by id; unassigned slots are empty
    pub async fn get_presets(&self) -> Result<Vec<Preset>> {
        let node = self.fetch_raw(Endpoint::Presets).await?;
        Ok(presets_from_node(&node)?)
    }

    pub async fn get_bass(&self) -> Result<Bass> {
        let node = self.fetch_raw(Endpoint::Bass).await?;
        Ok(Bass::from_node(&node)?)
    }

    pub async fn get_bass_capabilities(&self) -> Result<BassCapabilities> {
        let node = self.fetch_raw(Endpoint::BassCapabilities).await?;
        Ok(BassCapabilities::from_node(&node)?)
    }

    pub async fn get_tone(&self) -> Result<Tone> {
        let node = self.fetch_raw(Endpoint::Tone).await?;
        Ok(Tone::from_node(&node)?)
    }

    // Commands

    pub async fn set_name(&self, name: &str) -> Result<()> {
        self.send(Endpoint::Name, XmlFragment::new("name").text(name)).await
    }

    /// Switch to `source`, optionally on a specific account
    ///
    /// ```text
    /// <ContentItem source="AUX" location=""></ContentItem>
    /// ```
    pub async fn select_source(&self, source: &str, source_account: Option<&str>) -> Result<()> {
        let item = XmlFragment::new("ContentItem")
            .attr("source", source)
            .attr_opt("sourceAccount", source_account)
            .attr("location", "");
        self.send(Endpoint::Select, item).await
    }

    /// Set the volume level
    ///
    /// # Errors
    ///
    /// Levels above 100 fail with [`crate::ApiError::InvalidParameter`] before any
    /// request is made.
    pub async fn set_volume(&self, level: u8) -> Result<()> {
        let level = check_range("volume", level, VOLUME_RANGE.0, VOLUME_RANGE.1)?;
        self.send_volume(&level.to_string()).await
    }

    pub async fn mute(&self) -> Result<()> {
        self.send_volume("mute").await
    }

    pub async fn unmute(&self) -> Result<()> {
        self.send_volume("unmute").await
    }

    pub async fn volume_up(&self) -> Result<()> {
        self.send_volume("volumeUp").await
    }

    pub async fn volume_down(&self) -> Result<()> {
        self.send_volume("volumeDown").await
    }

    async fn send_volume(&self, value: &str) -> Result<()> {
        self.send(Endpoint::Volume, XmlFragment::new("volume").text(value)).await
    }

    /// Set the bass level, -10 through 10
    pub async fn set_bass(&self, level: i8) -> Result<()> {
        let level = check_range("bass", level, BASS_RANGE.0, BASS_RANGE.1)?;
        self.send(Endpoint::Bass, XmlFragment::new("bass").text(level.to_string())).await
    }

    // Keys

    /// Press a remote-control key
    pub async fn press_key(&self, key: Key) -> Result<()> {
        self.press_raw_key(key.as_str()).await
    }

    /// Press a key given by its wire name
    ///
    /// The name is not checked against [`Key::ALL`], so keys this library
    /// does not know about can still be sent. It is escaped like any other
    /// text.
    pub async fn press_raw_key(&self, key: &str) -> Result<()> {
        let body = XmlFragment::new("key")
            .attr("state", "press")
            .attr("sender", KEY_SENDER)
            .text(key);
        self.send(Endpoint::Key, body).await
    }

    pub async fn play(&self) -> Result<()> {
        self.press_key(Key::Play).await
    }

    pub async fn pause(&self) -> Result<()> {
        self.press_key(Key::Pause).await
    }

    /// Stop playback
    ///
    /// The key vocabulary has no stop key, so this sends `PAUSE`.
    pub async fn stop(&self) -> Result<()> {
        self.press_key(Key::Pause).await
    }

    /// Pause when playing, play otherwise
    ///
    /// Reads the play status first. If that read fails the error is returned
    /// and no key is pressed.
    pub async fn play_pause(&self) -> Result<()> {
        let now_playing = self.get_now_playing().await?;
        let key = if now_playing.is_playing() { Key::Pause } else { Key::Play };
        debug!(status = ?now_playing.play_status, %key, "toggling playback");
        self.press_key(key).await
    }

    pub async fn next_track(&self) -> Result<()> {
        self.press_key(Key::NextTrack).await
    }

    pub async fn previous_track(&self) -> Result<()> {
        self.press_key(Key::PrevTrack).await
    }

    /// Recall preset slot `id` (1 through 6)
    pub async fn select_preset(&self, id: u8) -> Result<()> {
        let key = Key::preset(id)?;
        self.press_key(key).await
    }

    /// Toggle standby
    pub async fn power(&self) -> Result<()> {
        self.press_key(Key::Power).await
    }

    pub async fn thumbs_up(&self) -> Result<()> {
        self.press_key(Key::ThumbsUp).await
    }

    pub async fn thumbs_down(&self) -> Result<()> {
        self.press_key(Key::ThumbsDown).await
    }

    pub async fn bookmark(&self) -> Result<()> {
        self.press_key(Key::Bookmark).await
    }

    pub async fn add_favorite(&self) -> Result<()> {
        self.press_key(Key::AddFavorite).await
    }

    pub async fn remove_favorite(&self) -> Result<()> {
        self.press_key(Key::RemoveFavorite).await
    }

    pub async fn aux_input(&self) -> Result<()> {
        self.press_key(Key::AuxInput).await
    }

    pub async fn set_shuffle(&self, enabled: bool) -> Result<()> {
        self.press_key(if enabled { Key::ShuffleOn } else { Key::ShuffleOff }).await
    }

    pub async fn set_repeat(&self, mode: RepeatMode) -> Result<()> {
        self.press_key(mode.key()).await
    }
}
