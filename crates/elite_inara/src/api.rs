//! Operations shared by the real and mock clients.

use crate::client::{InaraClient, parse_payload};
use crate::mock::MockInaraClient;
use crate::transport::HttpTransport;
use async_trait::async_trait;
use elite_config::ConfigProvider;
use elite_error::InaraResult;
use elite_models::{
    CommanderProfile, Event, EventName, ShipLoadout, Station, StationMarket, SystemFaction,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Typed Inara queries.
///
/// Absent or unparseable payloads come back as `None` or an empty list.
/// Errors are reserved for failed requests.
#[async_trait]
pub trait InaraApi: Send + Sync {
    /// Profile of `commander`, or of the default commander.
    async fn get_commander_profile(
        &self,
        commander: Option<&str>,
    ) -> InaraResult<Option<CommanderProfile>>;

    /// Every ship `commander` owns.
    async fn get_commander_ships(&self, commander: Option<&str>) -> InaraResult<Vec<ShipLoadout>>;

    /// The ship `commander` is flying, if any is flagged current.
    async fn get_current_ship(&self, commander: Option<&str>) -> InaraResult<Option<ShipLoadout>> {
        let ships = self.get_commander_ships(commander).await?;
        Ok(ships.into_iter().find(|ship| ship.is_current_ship))
    }

    /// Factions present in `system_name`.
    async fn get_system_factions(&self, system_name: &str) -> InaraResult<Vec<SystemFaction>>;

    /// Stations in `system_name`.
    async fn get_system_stations(&self, system_name: &str) -> InaraResult<Vec<Station>>;

    /// Market listing of a station.
    async fn get_station_market(&self, station_id: i64) -> InaraResult<Option<StationMarket>>;

    /// Forget cached responses.
    fn clear_cache(&self);

    /// Whether answers come from sample data.
    fn is_mock(&self) -> bool {
        false
    }
}

#[async_trait]
impl<T: HttpTransport> InaraApi for InaraClient<T> {
    #[instrument(skip(self))]
    async fn get_commander_profile(
        &self,
        commander: Option<&str>,
    ) -> InaraResult<Option<CommanderProfile>> {
        let response = self
            .send(vec![Event::new(EventName::GetCommanderProfile)], commander)
            .await?;
        Ok(parse_payload(&response, None))
    }

    #[instrument(skip(self))]
    async fn get_commander_ships(&self, commander: Option<&str>) -> InaraResult<Vec<ShipLoadout>> {
        let response = self
            .send(vec![Event::new(EventName::GetCommanderShips)], commander)
            .await?;
        Ok(parse_payload(&response, Some("ships")).unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn get_system_factions(&self, system_name: &str) -> InaraResult<Vec<SystemFaction>> {
        let event = Event::new(EventName::GetSystemFactions)
            .with_event_data(json!({ "systemName": system_name }));
        let response = self.send(vec![event], None).await?;
        Ok(parse_payload(&response, Some("factions")).unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn get_system_stations(&self, system_name: &str) -> InaraResult<Vec<Station>> {
        let event = Event::new(EventName::GetSystemStations)
            .with_event_data(json!({ "systemName": system_name }));
        let response = self.send(vec![event], None).await?;
        Ok(parse_payload(&response, Some("stations")).unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn get_station_market(&self, station_id: i64) -> InaraResult<Option<StationMarket>> {
        let event = Event::new(EventName::GetStationMarket)
            .with_event_data(json!({ "stationID": station_id }));
        let response = self.send(vec![event], None).await?;
        Ok(parse_payload(&response, None))
    }

    fn clear_cache(&self) {
        InaraClient::clear_cache(self);
    }
}

/// Choose a client implementation.
///
/// With `use_mock` set, or when the configuration cannot be loaded or the
/// HTTP client cannot be built, the mock is returned and a warning logged.
pub fn connect(use_mock: bool, provider: &ConfigProvider) -> Arc<dyn InaraApi> {
    if use_mock {
        info!("Using mock Inara client");
        return Arc::new(MockInaraClient::new());
    }

    let client = provider
        .get()
        .map_err(|e| e.to_string())
        .and_then(|config| InaraClient::new(config).map_err(|e| e.to_string()));

    match client {
        Ok(client) => Arc::new(client),
        Err(reason) => {
            warn!(reason = %reason, "Failed to create Inara client, falling back to mock");
            Arc::new(MockInaraClient::new())
        }
    }
}
