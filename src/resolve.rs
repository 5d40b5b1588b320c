//! The three lookup stages: station name → stops → trips → routes.
//!
//! Every stage works on sets borrowed from the [`FeedIndex`]. Ids the index does not
//! know contribute nothing, and an empty input always produces an empty output.

use std::collections::HashSet;

use crate::config::MatchConfig;
use crate::index::FeedIndex;

/// Stops whose name contains `query`.
pub fn resolve_stops<'a>(
    index: &'a FeedIndex,
    query: &str,
    config: &MatchConfig,
) -> HashSet<&'a str> {
    if query.trim().is_empty() {
        if config.empty_query_matches_all {
            return index.stops().map(|(stop_id, _)| stop_id).collect();
        }
        warn!("Empty station name, no stops matched");
        return HashSet::new();
    }

    if config.case_sensitive {
        index
            .stops()
            .filter(|(_, name)| name.contains(query))
            .map(|(stop_id, _)| stop_id)
            .collect()
    } else {
        let query = query.to_lowercase();
        index
            .stops()
            .filter(|(_, name)| name.to_lowercase().contains(&query))
            .map(|(stop_id, _)| stop_id)
            .collect()
    }
}

/// Trips visiting any of `stop_ids`.
pub fn resolve_trips<'a, I, S>(index: &'a FeedIndex, stop_ids: I) -> HashSet<&'a str>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    stop_ids
        .into_iter()
        .flat_map(|stop_id| index.trips_at(stop_id.as_ref()))
        .collect()
}

/// Routes operating any of `trip_ids`.
pub fn resolve_routes<'a, I, S>(index: &'a FeedIndex, trip_ids: I) -> HashSet<&'a str>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    trip_ids
        .into_iter()
        .filter_map(|trip_id| index.route_of(trip_id.as_ref()))
        .collect()
}
