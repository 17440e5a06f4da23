use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use soundtouch_parser::{ParseError, ParseResult, XmlNode};

/// Number of preset slots on every device
pub const PRESET_SLOTS: u8 = 6;

/// Reference to a playable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Source type, e.g. `INTERNET_RADIO`, `SPOTIFY`, `AUX`
    pub source: String,
    pub source_account: Option<String>,
    pub location: Option<String>,
    pub item_name: Option<String>,
    pub container_art: Option<String>,
    pub is_presetable: Option<bool>,
}

impl ContentItem {
    pub(crate) fn from_node(node: &XmlNode) -> ParseResult<Self> {
        Ok(Self {
            source: node.required_text("source")?.to_string(),
            source_account: node.non_empty_text("sourceAccount").map(str::to_string),
            location: node.non_empty_text("location").map(str::to_string),
            item_name: node.non_empty_text("itemName").map(str::to_string),
            container_art: node.non_empty_text("containerArt").map(str::to_string),
            is_presetable: node.bool_opt("isPresetable")?,
        })
    }

    /// Content item of a parent node, `None` when absent or attribute-less
    pub(crate) fn child_of(node: &XmlNode) -> ParseResult<Option<Self>> {
        node.node("ContentItem").map(Self::from_node).transpose()
    }
}

/// One of the six preset slots
///
/// A slot with nothing stored in it is still returned, with `content` unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    /// Slot number, 1 through 6
    pub id: u8,
    /// Creation time as reported by the device (seconds since epoch)
    pub created_on: Option<u64>,
    pub updated_on: Option<u64>,
    pub content: Option<ContentItem>,
}

impl Preset {
    pub fn empty(id: u8) -> Self {
        Self {
            id,
            created_on: None,
            updated_on: None,
            content: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    fn from_node(node: &XmlNode) -> ParseResult<Self> {
        let id: u8 = node.parse_required("id", "preset slot number")?;
        if !(1..=PRESET_SLOTS).contains(&id) {
            return Err(ParseError::InvalidValue {
                field: "id".to_string(),
                value: id.to_string(),
                expected: "preset slot number 1..=6",
            });
        }

        Ok(Self {
            id,
            created_on: node.parse_opt("createdOn", "timestamp")?,
            updated_on: node.parse_opt("updatedOn", "timestamp")?,
            content: ContentItem::child_of(node)?,
        })
    }
}

/// All six slots in order; slots missing from the response are empty
pub(crate) fn presets_from_node(node: &XmlNode) -> ParseResult<Vec<Preset>> {
    let mut found = BTreeMap::new();
    for value in node.list("preset") {
        // An attribute-less <preset/> carries no slot number to place it by
        let Some(preset_node) = value.as_node() else {
            continue;
        };
        let preset = Preset::from_node(preset_node)?;
        found.entry(preset.id).or_insert(preset);
    }

    Ok((1..=PRESET_SLOTS)
        .map(|id| found.remove(&id).unwrap_or_else(|| Preset::empty(id)))
        .collect())
}

/// A selectable source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceItem {
    pub source: String,
    pub source_account: Option<String>,
    /// `READY` or `UNAVAILABLE`
    pub status: Option<String>,
    pub is_local: Option<bool>,
    pub multiroom_allowed: Option<bool>,
    /// Label shown by the device, e.g. `AUX IN`
    pub display_name: Option<String>,
}

impl SourceItem {
    pub fn is_ready(&self) -> bool {
        self.status.as_deref() == Some("READY")
    }

    fn from_node(node: &XmlNode) -> ParseResult<Self> {
        Ok(Self {
            source: node.required_text("source")?.to_string(),
            source_account: node.non_empty_text("sourceAccount").map(str::to_string),
            status: node.non_empty_text("status").map(str::to_string),
            is_local: node.bool_opt("isLocal")?,
            multiroom_allowed: node.bool_opt("multiroomallowed")?,
            display_name: node.own_text().filter(|s| !s.is_empty()).map(str::to_string),
        })
    }
}

pub(crate) fn sources_from_node(node: &XmlNode) -> ParseResult<Vec<SourceItem>> {
    node.list("sourceItem")
        .iter()
        .map(|value| {
            value
                .as_node()
                .ok_or_else(|| ParseError::MissingRequiredElement("sourceItem.source".to_string()))
                .and_then(SourceItem::from_node)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use soundtouch_parser::parse;

    fn presets(xml: &str) -> Vec<Preset> {
        presets_from_node(&parse(xml).unwrap().normalize(&["preset"]).node).unwrap()
    }

    #[test]
    fn test_presets_always_have_six_slots() {
        let result = presets(
            r#"<presets>
                <preset id="2" createdOn="1598287430" updatedOn="1598287431">
                    <ContentItem source="INTERNET_RADIO" location="4712" sourceAccount="" isPresetable="true">
                        <itemName>Radio Paradise</itemName>
                        <containerArt>http://example.com/art.png</containerArt>
                    </ContentItem>
                </preset>
            </presets>"#,
        );

        assert_eq!(result.len(), 6);
        assert_eq!(result.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
        assert!(result[0].is_empty());

        let slot = &result[1];
        assert_eq!(slot.created_on, Some(1598287430));
        let content = slot.content.as_ref().unwrap();
        assert_eq!(content.source, "INTERNET_RADIO");
        assert_eq!(content.location.as_deref(), Some("4712"));
        assert_eq!(content.source_account, None);
        assert_eq!(content.item_name.as_deref(), Some("Radio Paradise"));
        assert_eq!(content.is_presetable, Some(true));
    }

    #[test]
    fn test_empty_presets_document() {
        let result = presets("<presets/>");
        assert_eq!(result, (1..=6).map(Preset::empty).collect::<Vec<_>>());
    }

    #[test]
    fn test_preset_out_of_range_is_parse_error() {
        let doc = parse(r#"<presets><preset id="9"/></presets>"#).unwrap();
        assert!(matches!(presets_from_node(&doc.node), Err(ParseError::InvalidValue { .. })));
    }

    #[test]
    fn test_sources() {
        let doc = parse(
            r#"<sources deviceID="689E19B8BB8A">
                <sourceItem source="AUX" sourceAccount="AUX" status="READY" isLocal="true" multiroomallowed="true">AUX IN</sourceItem>
                <sourceItem source="BLUETOOTH" status="UNAVAILABLE" isLocal="true" multiroomallowed="true" />
            </sources>"#,
        )
        .unwrap()
        .normalize(&["sourceItem"]);

        let sources = sources_from_node(&doc.node).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].display_name.as_deref(), Some("AUX IN"));
        assert!(sources[0].is_ready());
        assert_eq!(sources[1].source, "BLUETOOTH");
        assert_eq!(sources[1].display_name, None);
        assert!(!sources[1].is_ready());
    }
}
