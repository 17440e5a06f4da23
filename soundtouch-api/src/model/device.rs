use serde::{Deserialize, Serialize};
use soundtouch_parser::{ParseError, ParseResult, XmlNode, XmlValue};

/// Identity of a device, from `GET /info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub device_id: String,
    pub name: String,
    /// Product type, e.g. `SoundTouch 10`
    pub device_type: Option<String>,
    /// Network interfaces in device order; empty when none are reported
    pub network_info: Vec<NetworkInfo>,
    /// Hardware and software components
    pub components: Vec<Component>,
}

/// One network interface of a device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkInfo {
    /// Interface kind, e.g. `SCM` or `SMSC`
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub mac_address: Option<String>,
    pub ip_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub category: Option<String>,
    pub software_version: Option<String>,
    pub serial_number: Option<String>,
}

impl DeviceInfo {
    pub(crate) fn from_node(node: &XmlNode) -> ParseResult<Self> {
        let network_info = node
            .list("networkInfo")
            .iter()
            .filter_map(XmlValue::as_node)
            .map(|n| NetworkInfo {
                kind: n.non_empty_text("type").map(str::to_string),
                mac_address: n.non_empty_text("macAddress").map(str::to_string),
                ip_address: n.non_empty_text("ipAddress").map(str::to_string),
            })
            .collect();

        let components = node
            .node("components")
            .map(|c| c.list("component"))
            .unwrap_or_default()
            .iter()
            .filter_map(XmlValue::as_node)
            .map(|c| Component {
                category: c.non_empty_text("componentCategory").map(str::to_string),
                software_version: c.non_empty_text("softwareVersion").map(str::to_string),
                serial_number: c.non_empty_text("serialNumber").map(str::to_string),
            })
            .collect();

        Ok(Self {
            device_id: node.required_text("deviceID")?.to_string(),
            name: node.text("name").unwrap_or_default().to_string(),
            device_type: node.non_empty_text("type").map(str::to_string),
            network_info,
            components,
        })
    }
}

/// A named feature reported by `GET /capabilities`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub name: String,
    pub value: Option<String>,
    pub url: Option<String>,
}

pub(crate) fn capabilities_from_node(node: &XmlNode) -> ParseResult<Vec<Capability>> {
    node.list("capability")
        .iter()
        .map(|value| {
            let capability = value
                .as_node()
                .ok_or_else(|| ParseError::MissingRequiredElement("capability.name".to_string()))?;
            Ok(Capability {
                name: capability.required_text("name")?.to_string(),
                value: capability.non_empty_text("value").map(str::to_string),
                url: capability.non_empty_text("url").map(str::to_string),
            })
        })
        .collect()
}
