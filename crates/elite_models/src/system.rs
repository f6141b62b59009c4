//! Star system entities.

use serde::{Deserialize, Serialize};

/// A faction present in a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemFaction {
    /// Faction name
    pub faction_name: String,
    /// Government type
    pub faction_government: String,
    /// Superpower allegiance
    pub faction_allegiance: String,
    /// Current state (Boom, War, None...)
    pub faction_state: String,
    /// Influence share, 0.0 to 1.0
    pub faction_influence: f64,
    /// Happiness level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faction_happiness: Option<String>,
    /// Whether the faction controls the system
    #[serde(default)]
    pub is_controlling_faction: bool,
}

/// A station in a system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Inara station ID
    #[serde(rename = "stationID")]
    pub station_id: i64,
    /// Station name
    pub station_name: String,
    /// Station type
    pub station_type: String,
    /// Faction that controls the station
    pub controlling_faction: String,
    /// Available services
    #[serde(default)]
    pub station_services: Vec<String>,
    /// Primary economy
    pub station_economy: String,
    /// Secondary economy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_economy_second: Option<String>,
    /// Government type
    pub station_government: String,
    /// Distance from the arrival star, in light seconds
    pub distance_to_arrival: f64,
    /// Superpower allegiance
    pub station_allegiance: String,
    /// Current state
    pub station_state: String,
    /// Last market update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_updated: Option<String>,
    /// Last shipyard update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipyard_updated: Option<String>,
    /// Last outfitting update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outfitting_updated: Option<String>,
}
