//! Identity and authentication envelope.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Header sent with every Inara request.
///
/// The API key is required and must not be blank; the builder enforces it.
///
/// # Examples
///
/// ```
/// use elite_models::Header;
///
/// let header = Header::builder()
///     .app_name("EliteStatusCheck")
///     .app_version("1.1.0")
///     .api_key("abc123")
///     .commander_name("CMDR Test")
///     .build()
///     .unwrap();
///
/// let json = serde_json::to_value(&header).unwrap();
/// assert_eq!(json["APIkey"], "abc123");
/// assert_eq!(json["isDeveloped"], true);
///
/// assert!(Header::builder()
///     .app_name("EliteStatusCheck")
///     .app_version("1.1.0")
///     .api_key("  ")
///     .build()
///     .is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(rename_all = "camelCase")]
pub struct Header {
    /// Application name
    pub app_name: String,
    /// Application version
    pub app_version: String,
    /// Development flag
    #[builder(default = "true")]
    pub is_developed: bool,
    /// Inara API key
    #[serde(rename = "APIkey")]
    pub api_key: String,
    /// Commander the request is about
    #[builder(default, setter(strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commander_name: Option<String>,
    /// Commander's Frontier ID
    #[builder(default, setter(strip_option))]
    #[serde(
        rename = "commanderFrontierID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub commander_frontier_id: Option<String>,
}

impl Header {
    /// Start building a header.
    pub fn builder() -> HeaderBuilder {
        HeaderBuilder::default()
    }
}

impl HeaderBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.api_key {
            Some(key) if key.trim().is_empty() => Err("API key must not be empty".to_string()),
            _ => Ok(()),
        }
    }
}

/// Header echoed back by the remote.
///
/// Every field is optional: the remote reports its own status here and does
/// not mirror the request header faithfully.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResponseHeader {
    /// Overall request status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_status: Option<u16>,
    /// Overall request status text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_status_text: Option<String>,
    /// Account details the remote attaches (user ID, user name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_data: Option<JsonValue>,
    /// Echoed application name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    /// Echoed application version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    /// Echoed commander name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commander_name: Option<String>,
}
