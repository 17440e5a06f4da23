use serde::{Deserialize, Serialize};
use soundtouch_parser::{ParseError, ParseResult, XmlNode};

/// Range of volume levels accepted by the device
pub(crate) const VOLUME_RANGE: (u8, u8) = (0, 100);

/// Range of bass levels accepted by the device
pub(crate) const BASS_RANGE: (i8, i8) = (-10, 10);

/// Volume state from `GET /volume`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    /// Level the device is moving towards
    pub target_volume: u8,
    /// Level currently applied
    pub actual_volume: u8,
    pub mute_enabled: bool,
}

impl Volume {
    pub(crate) fn from_node(node: &XmlNode) -> ParseResult<Self> {
        Ok(Self {
            target_volume: level(node, "targetvolume")?,
            actual_volume: level(node, "actualvolume")?,
            mute_enabled: node.bool_required("muteenabled")?,
        })
    }
}

fn level(node: &XmlNode, key: &str) -> ParseResult<u8> {
    let value: u8 = node.parse_required(key, "volume level 0..=100")?;
    if value > VOLUME_RANGE.1 {
        return Err(ParseError::InvalidValue {
            field: key.to_string(),
            value: value.to_string(),
            expected: "volume level 0..=100",
        });
    }
    Ok(value)
}

/// Bass state from `GET /bass`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bass {
    pub target_bass: i8,
    pub actual_bass: i8,
    /// Only present on devices that report it alongside the level
    pub bass_available: Option<bool>,
}

impl Bass {
    pub(crate) fn from_node(node: &XmlNode) -> ParseResult<Self> {
        Ok(Self {
            target_bass: node.parse_required("targetbass", "bass level")?,
            actual_bass: node.parse_required("actualbass", "bass level")?,
            bass_available: node.bool_opt("bassAvailable")?,
        })
    }
}

/// Bass range from `GET /bassCapabilities`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BassCapabilities {
    pub bass_available: bool,
    pub bass_min: Option<i8>,
    pub bass_max: Option<i8>,
    pub bass_default: Option<i8>,
}

impl BassCapabilities {
    pub(crate) fn from_node(node: &XmlNode) -> ParseResult<Self> {
        Ok(Self {
            bass_available: node.bool_opt("bassAvailable")?.unwrap_or(false),
            bass_min: node.parse_opt("bassMin", "bass level")?,
            bass_max: node.parse_opt("bassMax", "bass level")?,
            bass_default: node.parse_opt("bassDefault", "bass level")?,
        })
    }
}

/// Tone state from `GET /tone`
///
/// Devices without tone control answer with an empty `<tone/>`, which
/// decodes to all fields unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tone {
    pub target_tone: Option<i8>,
    pub actual_tone: Option<i8>,
    pub tone_available: Option<bool>,
}

impl Tone {
    pub(crate) fn from_node(node: &XmlNode) -> ParseResult<Self> {
        Ok(Self {
            target_tone: node.parse_opt("targettone", "tone level")?,
            actual_tone: node.parse_opt("actualtone", "tone level")?,
            tone_available: node.bool_opt("toneAvailable")?,
        })
    }

    /// Whether the device supports tone control at all
    pub fn is_supported(&self) -> bool {
        self.tone_available.unwrap_or(self.target_tone.is_some())
    }
}
