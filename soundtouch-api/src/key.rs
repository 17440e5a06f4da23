//! Remote-control key vocabulary

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::{check_range, ValidationError};

/// Sender identity the device expects on key presses
pub const KEY_SENDER: &str = "Gabbo";

/// Named keys accepted by `POST /key`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Key {
    Power,
    Play,
    Pause,
    PrevTrack,
    NextTrack,
    ThumbsUp,
    ThumbsDown,
    Bookmark,
    #[serde(rename = "PRESET_1")]
    Preset1,
    #[serde(rename = "PRESET_2")]
    Preset2,
    #[serde(rename = "PRESET_3")]
    Preset3,
    #[serde(rename = "PRESET_4")]
    Preset4,
    #[serde(rename = "PRESET_5")]
    Preset5,
    #[serde(rename = "PRESET_6")]
    Preset6,
    AuxInput,
    ShuffleOff,
    ShuffleOn,
    RepeatOff,
    RepeatOne,
    RepeatAll,
    AddFavorite,
    RemoveFavorite,
    InvalidKey,
}

impl Key {
    pub const ALL: [Key; 23] = [
        Key::Power,
        Key::Play,
        Key::Pause,
        Key::PrevTrack,
        Key::NextTrack,
        Key::ThumbsUp,
        Key::ThumbsDown,
        Key::Bookmark,
        Key::Preset1,
        Key::Preset2,
        Key::Preset3,
        Key::Preset4,
        Key::Preset5,
        Key::Preset6,
        Key::AuxInput,
        Key::ShuffleOff,
        Key::ShuffleOn,
        Key::RepeatOff,
        Key::RepeatOne,
        Key::RepeatAll,
        Key::AddFavorite,
        Key::RemoveFavorite,
        Key::InvalidKey,
    ];

    /// Wire name of the key
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::Power => "POWER",
            Key::Play => "PLAY",
            Key::Pause => "PAUSE",
            Key::PrevTrack => "PREV_TRACK",
            Key::NextTrack => "NEXT_TRACK",
            Key::ThumbsUp => "THUMBS_UP",
            Key::ThumbsDown => "THUMBS_DOWN",
            Key::Bookmark => "BOOKMARK",
            Key::Preset1 => "PRESET_1",
            Key::Preset2 => "PRESET_2",
            Key::Preset3 => "PRESET_3",
            Key::Preset4 => "PRESET_4",
            Key::Preset5 => "PRESET_5",
            Key::Preset6 => "PRESET_6",
            Key::AuxInput => "AUX_INPUT",
            Key::ShuffleOff => "SHUFFLE_OFF",
            Key::ShuffleOn => "SHUFFLE_ON",
            Key::RepeatOff => "REPEAT_OFF",
            Key::RepeatOne => "REPEAT_ONE",
            Key::RepeatAll => "REPEAT_ALL",
            Key::AddFavorite => "ADD_FAVORITE",
            Key::RemoveFavorite => "REMOVE_FAVORITE",
            Key::InvalidKey => "INVALID_KEY",
        }
    }

    /// Key recalling preset slot `id`
    ///
    /// # Errors
    ///
    /// Slots are numbered 1 through 6.
    pub fn preset(id: u8) -> Result<Key, ValidationError> {
        let keys = [Key::Preset1, Key::Preset2, Key::Preset3, Key::Preset4, Key::Preset5, Key::Preset6];
        let id = check_range("preset", id, 1, 6)?;
        Ok(keys[usize::from(id - 1)])
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Key {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_value("key", s, "not a known key name"))
    }
}

/// Repeat setting selected through the REPEAT_* keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RepeatMode {
    Off,
    One,
    All,
}

impl RepeatMode {
    pub fn key(&self) -> Key {
        match self {
            RepeatMode::Off => Key::RepeatOff,
            RepeatMode::One => Key::RepeatOne,
            RepeatMode::All => Key::RepeatAll,
        }
    }
}
