/// Resources exposed by the SoundTouch Web API server
///
/// Each endpoint knows its path, the root element its GET response carries,
/// and which of that root's fields are repeatable. The repeatable-field table
/// is applied to every decoded response, so a field that may occur zero, one
/// or many times is always seen as a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Device identity and network interfaces
    Info,
    /// Feature list
    Capabilities,
    /// Current source, track metadata and play status
    NowPlaying,
    /// Selectable sources
    Sources,
    /// Volume level and mute state (GET and POST)
    Volume,
    /// The six preset slots
    Presets,
    /// Bass level (GET and POST)
    Bass,
    /// Bass range supported by the device
    BassCapabilities,
    /// Tone control
    Tone,
    /// Device name (POST only)
    Name,
    /// Source selection (POST only)
    Select,
    /// Remote-control key presses (POST only)
    Key,
}

impl Endpoint {
    pub const ALL: [Endpoint; 12] = [
        Endpoint::Info,
        Endpoint::Capabilities,
        Endpoint::NowPlaying,
        Endpoint::Sources,
        Endpoint::Volume,
        Endpoint::Presets,
        Endpoint::Bass,
        Endpoint::BassCapabilities,
        Endpoint::Tone,
        Endpoint::Name,
        Endpoint::Select,
        Endpoint::Key,
    ];

    /// HTTP path relative to the device base URL
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Info => "/info",
            Endpoint::Capabilities => "/capabilities",
            Endpoint::NowPlaying => "/now_playing",
            Endpoint::Sources => "/sources",
            Endpoint::Volume => "/volume",
            Endpoint::Presets => "/presets",
            Endpoint::Bass => "/bass",
            Endpoint::BassCapabilities => "/bassCapabilities",
            Endpoint::Tone => "/tone",
            Endpoint::Name => "/name",
            Endpoint::Select => "/select",
            Endpoint::Key => "/key",
        }
    }

    /// Root element of the GET response, `None` for write-only endpoints
    pub fn response_root(&self) -> Option<&'static str> {
        match self {
            Endpoint::Info => Some("info"),
            Endpoint::Capabilities => Some("capabilities"),
            Endpoint::NowPlaying => Some("nowPlaying"),
            Endpoint::Sources => Some("sources"),
            Endpoint::Volume => Some("volume"),
            Endpoint::Presets => Some("presets"),
            Endpoint::Bass => Some("bass"),
            Endpoint::BassCapabilities => Some("bassCapabilities"),
            Endpoint::Tone => Some("tone"),
            Endpoint::Name | Endpoint::Select | Endpoint::Key => None,
        }
    }

    /// Fields of the response root that are sequences
    ///
    /// Dot-separated paths address nested fields.
    pub fn repeated_fields(&self) -> &'static [&'static str] {
        match self {
            Endpoint::Info => &["networkInfo", "components.component"],
            Endpoint::Capabilities => &["capability"],
            Endpoint::Sources => &["sourceItem"],
            Endpoint::Presets => &["preset"],
            _ => &[],
        }
    }
}
