//! Which routes pass through a station, answered from a static GTFS feed.
//!
//! A feed folder is loaded once into a [`FeedIndex`]; each query then walks
//! station name → stops → trips → routes over in-memory maps.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod gtfs;
pub mod index;
pub mod loader;
pub mod query;
pub mod resolve;

#[cfg(test)]
mod fixtures;

pub use config::MatchConfig;
pub use error::FeedLoadError;
pub use index::FeedIndex;
pub use loader::load;
pub use query::{find_passing_routes, passing_routes, PassingRoutes, QueryDiagnostics};
