//! Typed schemas for the Inara API.
//!
//! Two groups of types live here:
//! - the wire envelope ([`Header`], [`Event`], [`Request`], [`Response`],
//!   [`ErrorResponse`]) with Inara's field names preserved through serde
//!   renames;
//! - the domain entities parsed out of an event payload (commander profile,
//!   ships, factions, stations, market).
//!
//! The remote answers in one of two shapes. [`ApiReply`] decides which by
//! inspecting the JSON before parsing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod commander;
mod envelope;
mod event;
mod header;
mod market;
mod ship;
mod system;

pub use commander::{CommanderCredits, CommanderProfile, CommanderRank, CommanderRanks};
pub use envelope::{ApiReply, ErrorHeader, ErrorResponse, EventResponse, Request, Response};
pub use event::{Event, EventName, inara_timestamp};
pub use header::{Header, HeaderBuilder, HeaderBuilderError, ResponseHeader};
pub use market::{MarketCommodity, StationMarket};
pub use ship::{ShipLoadout, ShipModule};
pub use system::{Station, SystemFaction};
