//! Sample-data client for running without an API key.

use crate::api::InaraApi;
use async_trait::async_trait;
use elite_error::InaraResult;
use elite_models::{CommanderProfile, ShipLoadout, Station, StationMarket, SystemFaction};
use tracing::info;

/// Answers [`InaraApi`] queries from fixed sample data.
///
/// System queries return the same three factions and one station for any
/// system; commander and market queries return nothing. No I/O is performed.
#[derive(Debug, Clone, Default)]
pub struct MockInaraClient {
    commander: Option<String>,
}

impl MockInaraClient {
    /// New mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Name used in log lines when a call does not name a commander.
    pub fn with_commander(mut self, name: impl Into<String>) -> Self {
        self.commander = Some(name.into());
        self
    }

    fn commander<'a>(&'a self, commander: Option<&'a str>) -> &'a str {
        commander.or(self.commander.as_deref()).unwrap_or("default")
    }
}

fn faction(
    name: &str,
    government: &str,
    allegiance: &str,
    influence: f64,
    happiness: &str,
    controlling: bool,
) -> SystemFaction {
    SystemFaction {
        faction_name: name.to_string(),
        faction_government: government.to_string(),
        faction_allegiance: allegiance.to_string(),
        faction_state: "None".to_string(),
        faction_influence: influence,
        faction_happiness: Some(happiness.to_string()),
        is_controlling_faction: controlling,
    }
}

#[async_trait]
impl InaraApi for MockInaraClient {
    async fn get_commander_profile(
        &self,
        commander: Option<&str>,
    ) -> InaraResult<Option<CommanderProfile>> {
        info!(commander = self.commander(commander), "Mock: commander profile");
        Ok(None)
    }

    async fn get_commander_ships(&self, commander: Option<&str>) -> InaraResult<Vec<ShipLoadout>> {
        info!(commander = self.commander(commander), "Mock: commander ships");
        Ok(Vec::new())
    }

    async fn get_system_factions(&self, system_name: &str) -> InaraResult<Vec<SystemFaction>> {
        info!(system_name, "Mock: system factions");
        Ok(vec![
            faction(
                "Federal Congress",
                "Democracy",
                "Federation",
                0.45,
                "Happy",
                true,
            ),
            faction(
                "Sol Workers' Party",
                "Democracy",
                "Federation",
                0.35,
                "Happy",
                false,
            ),
            faction(
                "Independent Pilots Federation",
                "Cooperative",
                "Independent",
                0.20,
                "Content",
                false,
            ),
        ])
    }

    async fn get_system_stations(&self, system_name: &str) -> InaraResult<Vec<Station>> {
        info!(system_name, "Mock: system stations");
        let updated = Some("2024-01-01T12:00:00Z".to_string());
        Ok(vec![Station {
            station_id: 1,
            station_name: "Abraham Lincoln".to_string(),
            station_type: "Orbis Starport".to_string(),
            controlling_faction: "Federal Congress".to_string(),
            station_services: ["Commodities", "Shipyard", "Outfitting", "Repair"]
                .map(String::from)
                .to_vec(),
            station_economy: "Industrial".to_string(),
            station_economy_second: Some("Refinery".to_string()),
            station_government: "Democracy".to_string(),
            distance_to_arrival: 496.0,
            station_allegiance: "Federation".to_string(),
            station_state: "None".to_string(),
            market_updated: updated.clone(),
            shipyard_updated: updated.clone(),
            outfitting_updated: updated,
        }])
    }

    async fn get_station_market(&self, station_id: i64) -> InaraResult<Option<StationMarket>> {
        info!(station_id, "Mock: station market");
        Ok(None)
    }

    fn clear_cache(&self) {}

    fn is_mock(&self) -> bool {
        true
    }
}
