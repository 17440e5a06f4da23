//! Request body encoding.
//!
//! Command bodies are single shallow elements, so they are built as strings
//! rather than through a writer. Every caller-supplied attribute value and
//! text content passes through [`escape`].

use std::borrow::Cow;
use std::fmt;

/// Escape the five XML reserved characters `& < > " '`
pub fn escape(raw: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(raw)
}

/// A single XML element with attributes and optional text content
///
/// Attributes are written in insertion order. The element is always written
/// with an explicit closing tag, even when it has no content, because the
/// device firmware does not accept self-closing command bodies.
///
/// ```
/// use soundtouch_parser::XmlFragment;
///
/// let body = XmlFragment::new("key")
///     .attr("state", "press")
///     .attr("sender", "Gabbo")
///     .text("PLAY")
///     .to_string();
/// assert_eq!(body, r#"<key state="press" sender="Gabbo">PLAY</key>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlFragment {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    text: Option<String>,
}

impl XmlFragment {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            text: None,
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl AsRef<str>) -> Self {
        self.attributes.push((name, escape(value.as_ref()).into_owned()));
        self
    }

    /// Add the attribute only when a value is present
    pub fn attr_opt(self, name: &'static str, value: Option<impl AsRef<str>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn text(mut self, content: impl AsRef<str>) -> Self {
        self.text = Some(escape(content.as_ref()).into_owned());
        self
    }
}

impl fmt::Display for XmlFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, value)?;
        }
        write!(f, ">{}</{}>", self.text.as_deref().unwrap_or(""), self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(escape(r#"a & b < c > d " e ' f"#), "a &amp; b &lt; c &gt; d &quot; e &apos; f");
    }

    #[test]
    fn test_escape_borrows_clean_input() {
        assert!(matches!(escape("Living Room"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_fragment_without_text_has_closing_tag() {
        let body = XmlFragment::new("ContentItem")
            .attr("source", "AUX")
            .attr("location", "")
            .to_string();
        assert_eq!(body, r#"<ContentItem source="AUX" location=""></ContentItem>"#);
    }

    #[test]
    fn test_optional_attribute() {
        let with = XmlFragment::new("ContentItem")
            .attr("source", "BLUETOOTH")
            .attr_opt("sourceAccount", Some("acct"))
            .to_string();
        let without = XmlFragment::new("ContentItem")
            .attr("source", "BLUETOOTH")
            .attr_opt("sourceAccount", None::<&str>)
            .to_string();

        assert_eq!(with, r#"<ContentItem source="BLUETOOTH" sourceAccount="acct"></ContentItem>"#);
        assert_eq!(without, r#"<ContentItem source="BLUETOOTH"></ContentItem>"#);
    }

    #[test]
    fn test_injection_is_neutralized() {
        let body = XmlFragment::new("name")
            .text("</name><evil attr='1'>")
            .to_string();
        assert_eq!(body, "<name>&lt;/name&gt;&lt;evil attr=&apos;1&apos;&gt;</name>");
    }
}
