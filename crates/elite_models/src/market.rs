//! Station market data.

use serde::{Deserialize, Serialize};

/// A listed commodity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCommodity {
    /// Commodity name
    pub commodity_name: String,
    /// Galactic average price
    pub mean_price: i64,
    /// Price the station sells at
    pub buy_price: i64,
    /// Price the station buys at
    pub sell_price: i64,
    /// Units in stock
    pub stock: i64,
    /// Stock level bracket
    pub stock_bracket: i64,
    /// Units in demand
    pub demand: i64,
    /// Demand level bracket
    pub demand_bracket: i64,
}

/// A station's market listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationMarket {
    /// Inara station ID
    #[serde(rename = "stationID")]
    pub station_id: i64,
    /// Listed commodities
    #[serde(default)]
    pub market_commodities: Vec<MarketCommodity>,
    /// Last market update
    pub market_last_update: String,
}
