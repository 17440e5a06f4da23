//! XML decoding into the generic value tree.
//!
//! Decoding is schema-less: an element that happens to appear once decodes
//! to a single value, the same element appearing twice decodes to a list.
//! Callers that know a field is repeatable must run [`normalize_sequences`]
//! (or [`XmlDocument::normalize`]) so the field is always a list.

use tracing::trace;
use xmltree::{Element, XMLNode};

use crate::error::{ParseError, ParseResult};
use crate::value::{XmlNode, XmlValue, TEXT_KEY};

/// A decoded response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    /// Local name of the root element, e.g. `volume`
    pub root: String,
    /// Fields of the root element
    pub node: XmlNode,
}

impl XmlDocument {
    /// Wrap every listed field in a sequence; see [`normalize_sequences`]
    pub fn normalize(mut self, paths: &[&str]) -> Self {
        normalize_sequences(&mut self.node, paths);
        self
    }

    /// Fail unless the root element has the given name
    pub fn expect_root(&self, expected: &str) -> ParseResult<()> {
        if self.root == expected {
            Ok(())
        } else {
            Err(ParseError::UnexpectedRoot {
                expected: expected.to_string(),
                found: self.root.clone(),
            })
        }
    }

    pub fn into_node(self) -> XmlNode {
        self.node
    }
}

/// Parse a response body into an [`XmlDocument`]
///
/// Attributes and child elements are merged into one flat node per element.
/// Text is trimmed and runs of whitespace collapse to a single space.
///
/// # Errors
///
/// Returns [`ParseError::MalformedXml`] if the body is not well-formed XML.
pub fn parse(xml: &str) -> ParseResult<XmlDocument> {
    let root = Element::parse(xml.as_bytes()).map_err(|e| ParseError::MalformedXml(e.to_string()))?;

    let (mut node, text) = element_fields(&root);
    if !text.is_empty() {
        node.insert(TEXT_KEY, XmlValue::Text(text));
    }

    trace!(root = %root.name, fields = node.len(), "decoded response document");

    Ok(XmlDocument {
        root: root.name,
        node,
    })
}

fn convert_element(element: &Element) -> XmlValue {
    let (mut node, text) = element_fields(element);
    if node.is_empty() {
        return XmlValue::Text(text);
    }
    if !text.is_empty() {
        node.insert(TEXT_KEY, XmlValue::Text(text));
    }
    XmlValue::Node(node)
}

/// Attributes and children of an element, plus its normalized character data
fn element_fields(element: &Element) -> (XmlNode, String) {
    let mut node = XmlNode::new();

    for (name, value) in &element.attributes {
        node.push(name.as_str(), XmlValue::Text(normalize_whitespace(value)));
    }

    let mut text = String::new();
    for child in &element.children {
        match child {
            XMLNode::Element(child) => node.push(child.name.as_str(), convert_element(child)),
            XMLNode::Text(t) | XMLNode::CData(t) => text.push_str(t),
            _ => {}
        }
    }

    (node, normalize_whitespace(&text))
}

fn normalize_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Force each listed field to be a sequence
///
/// Paths are dot-separated field names relative to `node`, e.g.
/// `"networkInfo"` or `"components.component"`. For each path:
/// an absent field becomes an empty list, a single value becomes a
/// one-element list, and an existing list is kept as is. When an
/// intermediate segment is absent there is nothing to normalize; when it is
/// a list, every item is normalized.
pub fn normalize_sequences(node: &mut XmlNode, paths: &[&str]) {
    for path in paths {
        let segments: Vec<&str> = path.split('.').filter(|s| !s.is_empty()).collect();
        normalize_in_node(node, &segments);
    }
}

fn normalize_in_node(node: &mut XmlNode, segments: &[&str]) {
    match segments {
        [] => {}
        [last] => {
            let normalized = match node.remove(last) {
                None => XmlValue::List(Vec::new()),
                Some(XmlValue::List(items)) => XmlValue::List(items),
                Some(single) => XmlValue::List(vec![single]),
            };
            node.insert(*last, normalized);
        }
        [head, rest @ ..] => {
            if let Some(child) = node.get_mut(head) {
                normalize_in_value(child, rest);
            }
        }
    }
}

fn normalize_in_value(value: &mut XmlValue, segments: &[&str]) {
    match value {
        XmlValue::Node(node) => normalize_in_node(node, segments),
        XmlValue::List(items) => {
            for item in items {
                normalize_in_value(item, segments);
            }
        }
        XmlValue::Text(_) => {}
    }
}
