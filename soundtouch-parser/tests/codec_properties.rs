//! Property tests for the codec invariants that every endpoint relies on

use proptest::prelude::*;
use rstest::rstest;
use soundtouch_parser::{parse, XmlFragment, XmlValue};

fn presets_document(count: usize) -> String {
    let mut xml = String::from("<presets>");
    for id in 1..=count {
        xml.push_str(&format!(
            r#"<preset id="{id}"><ContentItem source="INTERNET_RADIO" location="{id}"><itemName>Station {id}</itemName></ContentItem></preset>"#
        ));
    }
    xml.push_str("</presets>");
    xml
}

#[rstest]
#[case("info", "networkInfo", r#"<networkInfo type="SCM"><macAddress>AA</macAddress></networkInfo>"#)]
#[case("capabilities", "capability", r#"<capability name="clockDisplay" url="/clockDisplay"/>"#)]
#[case("sources", "sourceItem", r#"<sourceItem source="AUX" status="READY">AUX IN</sourceItem>"#)]
#[case("presets", "preset", r#"<preset id="1"/>"#)]
fn test_single_occurrence_normalizes_to_one_element_list(
    #[case] root: &str,
    #[case] field: &str,
    #[case] child: &str,
) {
    let xml = format!("<{root}>{child}</{root}>");
    let doc = parse(&xml).unwrap();
    assert!(!doc.node.get(field).unwrap().is_list(), "raw decode of one element is not a list");

    let doc = doc.normalize(&[field]);
    let value = doc.node.get(field).unwrap();
    assert!(value.is_list());
    assert_eq!(value.as_list().unwrap().len(), 1);
}

proptest! {
    #[test]
    fn prop_repeatable_field_length_matches_occurrences(count in 0usize..8) {
        let doc = parse(&presets_document(count)).unwrap().normalize(&["preset"]);
        let presets = doc.node.get("preset").and_then(XmlValue::as_list).unwrap();

        prop_assert_eq!(presets.len(), count);
        for (index, preset) in presets.iter().enumerate() {
            let node = preset.as_node().unwrap();
            let expected_id = (index + 1).to_string();
            prop_assert_eq!(node.text("id"), Some(expected_id.as_str()));
        }
    }

    #[test]
    fn prop_no_reserved_character_survives_encoding(name in ".*", source in ".*") {
        let body = XmlFragment::new("ContentItem")
            .attr("source", &source)
            .text(&name)
            .to_string();

        let inner = body
            .strip_prefix("<ContentItem source=\"")
            .and_then(|rest| rest.strip_suffix("</ContentItem>"))
            .unwrap();
        let (attr_value, text) = inner.split_once("\">").unwrap();

        for encoded in [attr_value, text] {
            prop_assert!(!encoded.contains(['<', '>', '"', '\'']));
            for (pos, _) in encoded.match_indices('&') {
                let rest = &encoded[pos..];
                prop_assert!(
                    ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"].iter().any(|e| rest.starts_with(e)),
                    "bare ampersand in {:?}", encoded
                );
            }
        }

        prop_assert_eq!(unescape(attr_value), source);
        prop_assert_eq!(unescape(text), name);
    }
}

fn unescape(encoded: &str) -> String {
    encoded
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
