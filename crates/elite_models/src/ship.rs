//! Ships and their fitted modules.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

fn default_true() -> bool {
    true
}

fn default_priority() -> i64 {
    1
}

fn default_health() -> f64 {
    1.0
}

/// A fitted module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipModule {
    /// Module name
    pub item_name: String,
    /// Purchase value
    pub item_value: i64,
    /// Powered on
    #[serde(default = "default_true")]
    pub is_on: bool,
    /// Power priority
    #[serde(default = "default_priority")]
    pub item_priority: i64,
    /// Rounds in the clip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_ammo_clip: Option<i64>,
    /// Rounds in the hopper
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_ammo_hopper: Option<i64>,
    /// Integrity, 0.0 to 1.0
    #[serde(default = "default_health")]
    pub item_health: f64,
    /// Slot the module sits in
    pub slot_name: String,
    /// Engineering modifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_modifications: Option<Vec<JsonValue>>,
}

/// A ship and its loadout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipLoadout {
    /// Ship model
    pub ship_type: String,
    /// Game-side ship ID
    #[serde(rename = "shipGameID")]
    pub ship_game_id: i64,
    /// Player-given name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_name: Option<String>,
    /// Player-given ident
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_ident: Option<String>,
    /// Whether the commander is flying it
    #[serde(default)]
    pub is_current_ship: bool,
    /// Total value
    pub ship_value: i64,
    /// Hull value
    pub ship_hull_value: i64,
    /// Modules value
    pub ship_modules_value: i64,
    /// Rebuy cost
    pub ship_rebuy_cost: i64,
    /// Fitted modules
    #[serde(default)]
    pub modules: Vec<ShipModule>,
    /// Last loadout update
    pub ship_last_update: String,
}
