use std::fmt;

use serde::{Deserialize, Serialize};
use soundtouch_parser::{ParseResult, XmlNode};
use tracing::warn;

use super::content::ContentItem;

/// Source reported while the device is in standby
const STANDBY_SOURCE: &str = "STANDBY";

/// Playback status reported in `<playStatus>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayStatus {
    Play,
    Pause,
    Stop,
    Buffering,
    Invalid,
    /// A status this library does not know; the raw value is kept
    Unknown(String),
}

impl PlayStatus {
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            "PLAY_STATE" => PlayStatus::Play,
            "PAUSE_STATE" => PlayStatus::Pause,
            "STOP_STATE" => PlayStatus::Stop,
            "BUFFERING_STATE" => PlayStatus::Buffering,
            "INVALID_PLAY_STATUS" => PlayStatus::Invalid,
            other => {
                warn!(status = other, "unknown play status");
                PlayStatus::Unknown(other.to_string())
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PlayStatus::Play => "PLAY_STATE",
            PlayStatus::Pause => "PAUSE_STATE",
            PlayStatus::Stop => "STOP_STATE",
            PlayStatus::Buffering => "BUFFERING_STATE",
            PlayStatus::Invalid => "INVALID_PLAY_STATUS",
            PlayStatus::Unknown(raw) => raw,
        }
    }

    /// Audio is playing or about to play
    pub fn is_active(&self) -> bool {
        matches!(self, PlayStatus::Play | PlayStatus::Buffering)
    }
}

impl fmt::Display for PlayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position within the current track, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackTime {
    pub position: u32,
    pub total: Option<u32>,
}

/// What the device is doing right now, from `GET /now_playing`
///
/// Which fields are set depends on the source: streaming services fill in
/// track metadata, `AUX` and `BLUETOOTH` often report little beyond the
/// source itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlaying {
    pub source: String,
    pub source_account: Option<String>,
    pub content_item: Option<ContentItem>,
    pub track: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub station_name: Option<String>,
    /// Cover art URL
    pub art: Option<String>,
    pub time: Option<PlaybackTime>,
    pub play_status: Option<PlayStatus>,
    pub shuffle_setting: Option<String>,
    pub repeat_setting: Option<String>,
    pub stream_type: Option<String>,
}

impl NowPlaying {
    pub(crate) fn from_node(node: &XmlNode) -> ParseResult<Self> {
        let text = |key: &str| node.non_empty_text(key).map(str::to_string);

        let time = match node.get("time") {
            None => None,
            Some(value) => match value.as_node() {
                // <time total="217">42</time>
                Some(time) => Some(PlaybackTime {
                    position: time.parse_required(soundtouch_parser::TEXT_KEY, "seconds")?,
                    total: time.parse_opt("total", "seconds")?,
                }),
                None => node
                    .parse_opt("time", "seconds")?
                    .map(|position| PlaybackTime { position, total: None }),
            },
        };

        Ok(Self {
            source: node.required_text("source")?.to_string(),
            source_account: text("sourceAccount"),
            content_item: ContentItem::child_of(node)?,
            track: text("track"),
            artist: text("artist"),
            album: text("album"),
            station_name: text("stationName"),
            art: text("art"),
            time,
            play_status: node.non_empty_text("playStatus").map(PlayStatus::from_wire),
            shuffle_setting: text("shuffleSetting"),
            repeat_setting: text("repeatSetting"),
            stream_type: text("streamType"),
        })
    }

    pub fn is_playing(&self) -> bool {
        self.play_status.as_ref().is_some_and(PlayStatus::is_active)
    }

    pub fn is_standby(&self) -> bool {
        self.source == STANDBY_SOURCE
    }
}
