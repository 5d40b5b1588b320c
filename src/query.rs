//! Station name → sorted route ids.

use std::fmt;
use std::path::Path;

use itertools::Itertools;

use crate::config::MatchConfig;
use crate::error::FeedLoadError;
use crate::index::FeedIndex;
use crate::loader;
use crate::resolve::{resolve_routes, resolve_stops, resolve_trips};

/// How many ids each stage of a query matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryDiagnostics {
    pub matched_stops: usize,
    pub matched_trips: usize,
    pub matched_routes: usize,
}

impl fmt::Display for QueryDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} stops, {} trips, {} routes",
            self.matched_stops, self.matched_trips, self.matched_routes
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassingRoutes {
    /// Distinct route ids, ascending by string comparison.
    pub route_ids: Vec<String>,
    pub diagnostics: QueryDiagnostics,
}

impl PassingRoutes {
    pub fn is_empty(&self) -> bool {
        self.route_ids.is_empty()
    }
}

/// Routes serving any stop whose name contains `query`.
pub fn find_passing_routes(index: &FeedIndex, query: &str, config: &MatchConfig) -> PassingRoutes {
    let stop_ids = resolve_stops(index, query, config);
    let trip_ids = resolve_trips(index, &stop_ids);
    let route_ids = resolve_routes(index, &trip_ids);

    let diagnostics = QueryDiagnostics {
        matched_stops: stop_ids.len(),
        matched_trips: trip_ids.len(),
        matched_routes: route_ids.len(),
    };
    debug!("Query {query:?} matched {diagnostics}");

    PassingRoutes {
        route_ids: route_ids.into_iter().sorted().map(String::from).collect(),
        diagnostics,
    }
}

/// Load the feed under `folder` and answer a single query against it.
///
/// Callers serving several queries should [`loader::load`] once and call
/// [`find_passing_routes`] per query instead.
pub fn passing_routes(
    folder: impl AsRef<Path>,
    query: &str,
    config: &MatchConfig,
) -> Result<PassingRoutes, FeedLoadError> {
    let index = loader::load(folder)?;
    Ok(find_passing_routes(&index, query, config))
}
