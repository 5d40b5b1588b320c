use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub stop_id: String,
    pub stop_name: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub route_id: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub route_id: String,
    pub trip_id: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StopTime {
    pub trip_id: String,
    pub stop_id: String,
}

/// The four tables of a feed, exactly as read from disk.
#[derive(Debug, Default)]
pub struct Feed {
    pub stops: Vec<Stop>,
    pub routes: Vec<Route>,
    pub trips: Vec<Trip>,
    pub stop_times: Vec<StopTime>,
}

/// A table of the feed, with the columns the index consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Routes,
    Stops,
    Trips,
    StopTimes,
}

impl Table {
    pub const ALL: [Table; 4] = [Table::Routes, Table::Stops, Table::Trips, Table::StopTimes];

    pub fn file_name(&self) -> &'static str {
        match self {
            Table::Routes => "routes.txt",
            Table::Stops => "stops.txt",
            Table::Trips => "trips.txt",
            Table::StopTimes => "stop_times.txt",
        }
    }

    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Table::Routes => &["route_id"],
            Table::Stops => &["stop_id", "stop_name"],
            Table::Trips => &["trip_id", "route_id"],
            Table::StopTimes => &["trip_id", "stop_id"],
        }
    }
}
