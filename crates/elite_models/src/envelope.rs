//! Request and response envelopes.

use crate::{Event, Header, ResponseHeader};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Full request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Identity and authentication
    pub header: Header,
    /// Events to process, in order
    pub events: Vec<Event>,
}

impl Request {
    /// Bundle a header with its events.
    pub fn new(header: Header, events: Vec<Event>) -> Self {
        Self { header, events }
    }
}

/// Outcome of one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    /// Status code (200 ok, 202 auth problem, 204 no data, 4xx error)
    pub event_status: u16,
    /// Human-readable status
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub event_status_text: String,
    /// Result payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_data: Option<JsonValue>,
    /// Echo of the request's custom ID
    #[serde(
        rename = "eventCustomID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub event_custom_id: Option<i64>,
}

impl EventResponse {
    /// Status text, or a placeholder when the remote sent none.
    pub fn status_text(&self) -> &str {
        if self.event_status_text.is_empty() {
            "Unknown error"
        } else {
            &self.event_status_text
        }
    }
}

/// Successful response shape: a header plus one result per event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Remote header
    #[serde(default)]
    pub header: ResponseHeader,
    /// Results, in request order
    pub events: Vec<EventResponse>,
}

impl Response {
    /// Payload of the first event, if any.
    pub fn first_data(&self) -> Option<&JsonValue> {
        self.events.first().and_then(|event| event.event_data.as_ref())
    }
}

/// Header of the simplified error shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorHeader {
    /// Error status
    pub event_status: u16,
    /// Error text
    #[serde(default)]
    pub event_status_text: String,
}

/// Simplified error shape: a header only, no events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error header
    pub header: ErrorHeader,
}

/// Either of the two shapes Inara replies with.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply {
    /// Header plus per-event results
    Full(Response),
    /// Header-only error
    Error(ErrorResponse),
}

impl ApiReply {
    /// Classify a decoded body by structure.
    ///
    /// A body with a `header.eventStatus` and no `events` key is the error
    /// shape; anything else must parse as the full shape.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the body matches neither shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use elite_models::ApiReply;
    /// use serde_json::json;
    ///
    /// let reply = ApiReply::from_value(json!({
    ///     "header": {"eventStatus": 400, "eventStatusText": "Invalid API key"}
    /// }))
    /// .unwrap();
    /// assert!(matches!(reply, ApiReply::Error(_)));
    ///
    /// let reply = ApiReply::from_value(json!({
    ///     "header": {"eventStatus": 200},
    ///     "events": [{"eventStatus": 200, "eventData": {}}]
    /// }))
    /// .unwrap();
    /// assert!(matches!(reply, ApiReply::Full(_)));
    /// ```
    pub fn from_value(value: JsonValue) -> Result<Self, serde_json::Error> {
        let is_error_shape = value.get("events").is_none()
            && value
                .get("header")
                .and_then(|header| header.get("eventStatus"))
                .is_some();

        if is_error_shape {
            serde_json::from_value(value).map(Self::Error)
        } else {
            serde_json::from_value(value).map(Self::Full)
        }
    }
}
