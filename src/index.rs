//! In-memory lookup structures over a loaded feed.
//!
//! The stop → trips map is inverted from `stop_times.txt` once, at build time, so
//! resolving any number of stops costs one hash lookup per stop.

use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::gtfs::Feed;

#[derive(Debug, Default, Clone)]
pub struct FeedIndex {
    stop_names: HashMap<String, String>,
    trips_by_stop: HashMap<String, HashSet<String>>,
    route_by_trip: HashMap<String, String>,
    route_ids: HashSet<String>,
}

impl FeedIndex {
    pub fn stop_count(&self) -> usize {
        self.stop_names.len()
    }

    pub fn trip_count(&self) -> usize {
        self.route_by_trip.len()
    }

    pub fn stop_name(&self, stop_id: &str) -> Option<&str> {
        self.stop_names.get(stop_id).map(String::as_str)
    }

    /// Routes listed in routes.txt. Trips may name routes outside this set.
    pub fn route_count(&self) -> usize {
        self.route_ids.len()
    }

    /// `(stop_id, stop_name)` pairs, in no particular order.
    pub fn stops(&self) -> impl Iterator<Item = (&str, &str)> {
        self.stop_names
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }

    /// Trips visiting a stop. Unknown stops yield nothing.
    pub fn trips_at(&self, stop_id: &str) -> impl Iterator<Item = &str> {
        self.trips_by_stop
            .get(stop_id)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    pub fn route_of(&self, trip_id: &str) -> Option<&str> {
        self.route_by_trip.get(trip_id).map(String::as_str)
    }
}

impl From<Feed> for FeedIndex {
    fn from(feed: Feed) -> Self {
        let route_ids: HashSet<String> = feed.routes.into_iter().map(|r| r.route_id).collect();

        let stop_names: HashMap<String, String> = feed
            .stops
            .into_iter()
            .map(|stop| (stop.stop_id, stop.stop_name))
            .collect();

        let trip_total = feed.trips.len();
        let route_by_trip: HashMap<String, String> = feed
            .trips
            .into_iter()
            .map(|trip| (trip.trip_id, trip.route_id))
            .collect();
        if route_by_trip.len() < trip_total {
            debug!(
                "Dropped {} trips repeating an earlier trip_id, the last row wins",
                trip_total - route_by_trip.len()
            );
        }

        let stop_time_total = feed.stop_times.len();
        let mut kept = 0;
        let trips_by_stop: HashMap<String, HashSet<String>> = feed
            .stop_times
            .into_iter()
            .filter(|st| {
                stop_names.contains_key(&st.stop_id) && route_by_trip.contains_key(&st.trip_id)
            })
            .inspect(|_| kept += 1)
            .map(|st| (st.stop_id, st.trip_id))
            .into_grouping_map()
            .collect();
        if kept < stop_time_total {
            debug!(
                "Dropped {} stop_times referencing an unknown stop or trip",
                stop_time_total - kept
            );
        }

        debug!(
            "Indexed {} stops, {} trips, {} routes, {} stop_times",
            stop_names.len(),
            route_by_trip.len(),
            route_ids.len(),
            kept
        );

        Self {
            stop_names,
            trips_by_stop,
            route_by_trip,
            route_ids,
        }
    }
}
