//! Generic value tree produced by the decoder.
//!
//! Every element becomes either a text scalar or a flat node whose fields
//! are its attributes and child elements, merged. When an element carries
//! both fields and character data, the text is stored under [`TEXT_KEY`].
//! Elements that repeat under the same parent collapse into a list.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{ParseError, ParseResult};

/// Field name used for the character data of an element that also has
/// attributes or children, e.g. `<sourceItem source="AUX">AUX IN</sourceItem>`.
pub const TEXT_KEY: &str = "_";

/// A decoded XML value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum XmlValue {
    /// Character data of a leaf element, trimmed and whitespace-normalized
    Text(String),
    /// An element with attributes and/or child elements
    Node(XmlNode),
    /// Several same-named siblings, or a field normalized to a sequence
    List(Vec<XmlValue>),
}

impl XmlValue {
    /// Text content of this value, if it has any
    ///
    /// For a node this is the character data stored under [`TEXT_KEY`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            XmlValue::Text(s) => Some(s),
            XmlValue::Node(node) => node.own_text(),
            XmlValue::List(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&XmlNode> {
        match self {
            XmlValue::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[XmlValue]> {
        match self {
            XmlValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, XmlValue::List(_))
    }
}

/// Flat dictionary of an element's attributes and children
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct XmlNode {
    fields: BTreeMap<String, XmlValue>,
}

impl XmlNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut XmlValue> {
        self.fields.get_mut(key)
    }

    /// Insert a field, replacing any previous value under the same key
    pub fn insert(&mut self, key: impl Into<String>, value: XmlValue) {
        self.fields.insert(key.into(), value);
    }

    /// Add a field, turning a repeated key into a list in document order
    pub fn push(&mut self, key: impl Into<String>, value: XmlValue) {
        let key = key.into();
        match self.fields.remove(&key) {
            None => {
                self.fields.insert(key, value);
            }
            Some(XmlValue::List(mut items)) => {
                items.push(value);
                self.fields.insert(key, XmlValue::List(items));
            }
            Some(existing) => {
                self.fields.insert(key, XmlValue::List(vec![existing, value]));
            }
        }
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<XmlValue> {
        self.fields.remove(key)
    }

    /// Character data of the element itself
    pub fn own_text(&self) -> Option<&str> {
        match self.fields.get(TEXT_KEY) {
            Some(XmlValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn node(&self, key: &str) -> Option<&XmlNode> {
        self.get(key).and_then(XmlValue::as_node)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(XmlValue::as_text)
    }

    /// Text of a field, treating an empty element the same as a missing one
    pub fn non_empty_text(&self, key: &str) -> Option<&str> {
        self.text(key).filter(|s| !s.is_empty())
    }

    pub fn required_text(&self, key: &str) -> ParseResult<&str> {
        self.text(key)
            .ok_or_else(|| ParseError::MissingRequiredElement(key.to_string()))
    }

    /// Items of a repeatable field
    ///
    /// A missing field yields an empty slice and a single value yields a
    /// one-element slice, so callers see a sequence whether or not the
    /// tree was normalized.
    pub fn list(&self, key: &str) -> &[XmlValue] {
        match self.fields.get(key) {
            None => &[],
            Some(XmlValue::List(items)) => items,
            Some(single) => std::slice::from_ref(single),
        }
    }

    /// Parse an optional field with `FromStr`; an empty element counts as absent
    pub fn parse_opt<T: FromStr>(&self, key: &str, expected: &'static str) -> ParseResult<Option<T>> {
        match self.non_empty_text(key) {
            None => Ok(None),
            Some(raw) => raw.parse::<T>().map(Some).map_err(|_| ParseError::InvalidValue {
                field: key.to_string(),
                value: raw.to_string(),
                expected,
            }),
        }
    }

    pub fn parse_required<T: FromStr>(&self, key: &str, expected: &'static str) -> ParseResult<T> {
        self.parse_opt(key, expected)?
            .ok_or_else(|| ParseError::MissingRequiredElement(key.to_string()))
    }

    pub fn bool_opt(&self, key: &str) -> ParseResult<Option<bool>> {
        match self.non_empty_text(key) {
            None => Ok(None),
            Some(raw) => parse_bool(raw).map(Some).ok_or_else(|| ParseError::InvalidValue {
                field: key.to_string(),
                value: raw.to_string(),
                expected: "boolean",
            }),
        }
    }

    pub fn bool_required(&self, key: &str) -> ParseResult<bool> {
        self.bool_opt(key)?
            .ok_or_else(|| ParseError::MissingRequiredElement(key.to_string()))
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    if raw.eq_ignore_ascii_case("true") {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
