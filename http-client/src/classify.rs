//! Mapping of failed round trips onto [`TransportError`] kinds.
//!
//! Priority order: a refused or unresolvable destination is a connection
//! error; an elapsed timeout is a timeout even if some body was received;
//! a structured error payload is a device error; anything else is a
//! connection error carrying the underlying message.

use tracing::debug;
use xmltree::Element;

use crate::error::TransportError;

/// Observable facts about a failed request
#[derive(Debug, Default)]
pub(crate) struct Failure<'a> {
    /// Connection refused or host name did not resolve
    pub refused: bool,
    /// The timeout elapsed or the connection was aborted for timing reasons
    pub timed_out: bool,
    /// Response body, when the device answered with a non-success status
    pub body: Option<&'a str>,
    /// Underlying error text, used when nothing more specific applies
    pub message: String,
}

pub(crate) fn classify(failure: Failure<'_>) -> TransportError {
    let error = if failure.refused {
        TransportError::Connection(failure.message)
    } else if failure.timed_out {
        TransportError::Timeout(failure.message)
    } else if let Some((name, code, message)) = failure.body.and_then(parse_error_body) {
        TransportError::Device { name, code, message }
    } else {
        TransportError::Connection(failure.message)
    };

    debug!(error = %error, "classified request failure");
    error
}

/// Facts about a reqwest error raised before a response was available
pub(crate) fn from_reqwest(error: &reqwest::Error) -> Failure<'static> {
    Failure {
        refused: error.is_connect() && !error.is_timeout(),
        timed_out: error.is_timeout(),
        body: None,
        message: error.to_string(),
    }
}

/// Extract `(name, code, message)` from an error payload
///
/// Accepts the device's XML shape, either
/// `<errors><error name=".." value="..">message</error></errors>` or a bare
/// `<error>`, as well as JSON of the form
/// `{"error": {"name": .., "code": .., "message": ..}}`.
pub(crate) fn parse_error_body(body: &str) -> Option<(String, i64, Option<String>)> {
    let trimmed = body.trim();
    if trimmed.starts_with('<') {
        parse_xml_error(trimmed)
    } else if trimmed.starts_with('{') {
        parse_json_error(trimmed)
    } else {
        None
    }
}

fn parse_xml_error(body: &str) -> Option<(String, i64, Option<String>)> {
    let root = Element::parse(body.as_bytes()).ok()?;
    let error = match root.name.as_str() {
        "error" => &root,
        "errors" => root.get_child("error")?,
        _ => return None,
    };

    let field = |key: &str| -> Option<String> {
        error
            .attributes
            .get(key)
            .cloned()
            .or_else(|| error.get_child(key).and_then(|c| c.get_text()).map(|t| t.trim().to_string()))
    };

    let name = field("name")?;
    let code = field("value")
        .or_else(|| field("code"))
        .and_then(|c| c.trim().parse::<i64>().ok())?;
    let message = field("message").or_else(|| {
        error
            .children
            .iter()
            .filter_map(|node| node.as_text())
            .map(str::trim)
            .find(|text| !text.is_empty())
            .map(str::to_string)
    });

    Some((name, code, message))
}

fn parse_json_error(body: &str) -> Option<(String, i64, Option<String>)> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let error = value.get("error")?;

    let name = error.get("name")?.as_str()?.to_string();
    let code = match error.get("code")? {
        serde_json::Value::Number(n) => n.as_i64()?,
        serde_json::Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    let message = error
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string);

    Some((name, code, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn failure(refused: bool, timed_out: bool, body: Option<&str>) -> Failure<'_> {
        Failure {
            refused,
            timed_out,
            body,
            message: "underlying".to_string(),
        }
    }

    const JSON_ERROR: &str = r#"{"error":{"name":"X","code":5}}"#;

    #[rstest]
    #[case::refused(failure(true, false, None))]
    #[case::refused_beats_body(failure(true, false, Some(JSON_ERROR)))]
    #[case::unclassified(failure(false, false, None))]
    #[case::unstructured_body(failure(false, false, Some("<html>Internal Server Error</html>")))]
    fn test_connection_classification(#[case] failure: Failure<'_>) {
        assert_eq!(classify(failure), TransportError::Connection("underlying".to_string()));
    }

    #[test]
    fn test_timeout_wins_over_structured_body() {
        let error = classify(failure(false, true, Some(JSON_ERROR)));
        assert_eq!(error, TransportError::Timeout("underlying".to_string()));
    }

    #[test]
    fn test_structured_json_body_is_device_error() {
        let error = classify(failure(false, false, Some(JSON_ERROR)));
        assert_eq!(
            error,
            TransportError::Device {
                name: "X".to_string(),
                code: 5,
                message: None,
            }
        );
    }

    #[test]
    fn test_soundtouch_xml_error_body() {
        let body = r#"<?xml version="1.0" encoding="UTF-8" ?>
            <errors deviceID="689E19B8BB8A">
                <error value="1019" name="CLIENT_XML_ERROR" severity="Unknown">Invalid key name</error>
            </errors>"#;

        assert_eq!(
            parse_error_body(body),
            Some(("CLIENT_XML_ERROR".to_string(), 1019, Some("Invalid key name".to_string())))
        );
    }

    #[test]
    fn test_bare_xml_error_with_child_elements() {
        let body = "<error><name>HTTP_STATUS_NOT_FOUND</name><code>404</code><message>no such path</message></error>";
        assert_eq!(
            parse_error_body(body),
            Some(("HTTP_STATUS_NOT_FOUND".to_string(), 404, Some("no such path".to_string())))
        );
    }

    #[rstest]
    #[case::missing_code(r#"{"error":{"name":"X"}}"#)]
    #[case::missing_name(r#"{"error":{"code":5}}"#)]
    #[case::not_an_error(r#"{"status":"ok"}"#)]
    #[case::plain_text("Not Found")]
    #[case::xml_without_error("<status>ok</status>")]
    #[case::non_numeric_code(r#"<error name="X" value="abc"/>"#)]
    fn test_incomplete_error_bodies_are_not_structured(#[case] body: &str) {
        assert_eq!(parse_error_body(body), None);
    }

    #[test]
    fn test_json_code_as_string_and_message() {
        let body = r#"{"error":{"name":"X","code":"7","message":"busy"}}"#;
        assert_eq!(parse_error_body(body), Some(("X".to_string(), 7, Some("busy".to_string()))));
    }
}
