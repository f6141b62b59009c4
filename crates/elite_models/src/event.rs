//! Inara events: the unit of work in a request.

use chrono::{DateTime, SecondsFormat, Utc};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Event types this client issues.
///
/// Serializes to Inara's camelCase event names.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum EventName {
    /// Commander profile
    GetCommanderProfile,
    /// Current ship
    GetCommanderShip,
    /// All owned ships
    GetCommanderShips,
    /// Credit balance
    GetCommanderCredits,
    /// Pilot ranks
    GetCommanderRanks,
    /// Faction reputation
    GetCommanderReputation,
    /// Stations in a system
    GetSystemStations,
    /// Factions present in a system
    GetSystemFactions,
    /// Station market listing
    GetStationMarket,
    /// Record a dock
    SetCommanderTravelDock,
    /// Record a hyperspace jump
    SetCommanderTravelJump,
}

/// Format a timestamp the way Inara expects (`2024-01-01T12:00:00Z`).
pub fn inara_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// A single event in a request.
///
/// # Examples
///
/// ```
/// use elite_models::{Event, EventName};
/// use serde_json::json;
///
/// let event = Event::new(EventName::GetSystemFactions)
///     .with_event_data(json!({"systemName": "Sol"}))
///     .with_event_custom_id(7);
///
/// let wire = serde_json::to_value(&event).unwrap();
/// assert_eq!(wire["eventName"], "getSystemFactions");
/// assert_eq!(wire["eventData"]["systemName"], "Sol");
/// assert_eq!(wire["eventCustomID"], 7);
/// assert!(wire["eventTimestamp"].as_str().unwrap().ends_with('Z'));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_", strip_option)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event type
    #[setters(skip)]
    pub event_name: EventName,
    /// UTC creation time
    #[setters(skip)]
    pub event_timestamp: String,
    /// Event payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_data: Option<JsonValue>,
    /// Caller-chosen correlation ID, echoed in the response
    #[serde(
        rename = "eventCustomID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub event_custom_id: Option<i64>,
}

impl Event {
    /// New event stamped with the current UTC time.
    pub fn new(event_name: EventName) -> Self {
        Self::at(event_name, Utc::now())
    }

    /// New event stamped with an explicit time.
    pub fn at(event_name: EventName, timestamp: DateTime<Utc>) -> Self {
        Self {
            event_name,
            event_timestamp: inara_timestamp(timestamp),
            event_data: None,
            event_custom_id: None,
        }
    }
}
