//! Commander profile, ranks and credits.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One rank track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommanderRank {
    /// Rank title
    pub rank_name: String,
    /// Numeric rank
    pub rank_value: i64,
    /// Progress towards the next rank, 0.0 to 1.0
    pub rank_progress: f64,
}

/// All of a commander's rank tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommanderRanks {
    /// Combat
    pub combat: CommanderRank,
    /// Trade
    pub trade: CommanderRank,
    /// Exploration
    pub explore: CommanderRank,
    /// Mercenary
    pub soldier: CommanderRank,
    /// Exobiology
    pub exobiologist: CommanderRank,
    /// Close quarters combat
    pub cqc: CommanderRank,
    /// Federal navy
    pub federation: CommanderRank,
    /// Imperial navy
    pub empire: CommanderRank,
    /// Absent when the commander is not pledged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub powerplay: Option<CommanderRank>,
}

/// Credit balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommanderCredits {
    /// Current balance
    pub balance: i64,
    /// Outstanding loan
    #[serde(default)]
    pub loan: i64,
}

/// Commander profile as Inara reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommanderProfile {
    /// Inara user ID
    #[serde(rename = "userID")]
    pub user_id: i64,
    /// Inara user name
    pub user_name: String,
    /// In-game commander name
    pub commander_name: String,
    /// Rank tracks
    pub commander_ranks_pilot: CommanderRanks,
    /// Credit balance
    pub commander_credits: CommanderCredits,
    /// Preferred superpower
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_allegiance_name: Option<String>,
    /// Preferred power
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_power_name: Option<String>,
    /// Last known location (system, station)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_game_location: Option<HashMap<String, String>>,
    /// Avatar URL
    #[serde(
        rename = "avatarImageURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_image_url: Option<String>,
    /// Profile creation time
    pub profile_created: String,
    /// Last profile update
    pub profile_last_update: String,
}
