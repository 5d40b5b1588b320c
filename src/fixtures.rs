//! A small slice of the New York City subway feed, written to a temporary folder.

use std::path::Path;

use tempfile::TempDir;

use crate::index::FeedIndex;
use crate::loader;

const ROUTES: &str = "\
agency_id,route_id,route_short_name,route_long_name,route_type,route_color
MTA NYCT,1,1,Broadway - 7 Avenue Local,1,EE352E
MTA NYCT,2,2,7 Avenue Express,1,EE352E
MTA NYCT,4,4,Lexington Avenue Express,1,00933C
MTA NYCT,5,5,Lexington Avenue Express,1,00933C
MTA NYCT,6,6,Lexington Avenue Local,1,00933C
MTA NYCT,6X,6X,Pelham Bay Park Express,1,00A65C
MTA NYCT,7,7,Flushing Local,1,B933AD
MTA NYCT,7X,7X,Flushing Express,1,B933AD
MTA NYCT,A,A,8 Avenue Express,1,2850AD
MTA NYCT,GS,S,42 St Shuttle,1,6D6E71
MTA NYCT,L,L,14 St-Canarsie Local,1,A7A9AC
";

const STOPS: &str = "\
stop_id,stop_code,stop_name,stop_desc,stop_lat,stop_lon,location_type,parent_station
127,,Times Sq - 42 St,,40.75529,-73.987495,1,
127N,,Times Sq - 42 St,,40.75529,-73.987495,0,127
127S,,Times Sq - 42 St,,40.75529,-73.987495,0,127
631,,Grand Central - 42 St,,40.751776,-73.976848,1,
631N,,Grand Central - 42 St,,40.751776,-73.976848,0,631
631S,,Grand Central - 42 St,,40.751776,-73.976848,0,631
640,,Brooklyn Bridge - City Hall,,40.713065,-74.004131,1,
640N,,Brooklyn Bridge - City Hall,,40.713065,-74.004131,0,640
723,,Grand Central - 42 St,,40.751431,-73.976041,1,
723N,,Grand Central - 42 St,,40.751431,-73.976041,0,723
723S,,Grand Central - 42 St,,40.751431,-73.976041,0,723
901,,Grand Central - 42 St,,40.752769,-73.979189,1,
901N,,Grand Central - 42 St,,40.752769,-73.979189,0,901
902,,Times Sq - 42 St,,40.755983,-73.986229,1,
902N,,Times Sq - 42 St,,40.755983,-73.986229,0,902
A27,,42 St - Port Authority Bus Terminal,,40.757308,-73.989735,1,
A27N,,42 St - Port Authority Bus Terminal,,40.757308,-73.989735,0,A27
L06,,1 Av,,40.730953,-73.981628,1,
L06N,,1 Av,,40.730953,-73.981628,0,L06
";

const TRIPS: &str = "\
route_id,service_id,trip_id,trip_headsign,direction_id,shape_id
1,WKD,1_local_1,Van Cortlandt Park - 242 St,0,1..N03R
2,SAT,2_late_1,Wakefield - 241 St,0,2..N08R
4,WKD,4_express_1,Woodlawn,0,4..N06R
5,WKD,5_express_1,Eastchester - Dyre Av,0,5..N71R
5,SAT,5_express_2,Eastchester - Dyre Av,1,5..S71R
6,WKD,6_local_1,Pelham Bay Park,0,6..N01R
6X,WKD,6X_express_1,Pelham Bay Park,0,6..N13R
7,WKD,7_local_1,Flushing - Main St,0,7..N97R
7X,WKD,7X_express_1,Flushing - Main St,0,7..N98R
A,WKD,A_express_1,Inwood - 207 St,0,A..N55R
GS,WKD,GS_shuttle_1,Grand Central,0,S..N01R
L,WKD,L_local_1,8 Av,1,L..S01R
";

const STOP_TIMES: &str = "\
trip_id,arrival_time,departure_time,stop_id,stop_sequence,pickup_type,drop_off_type
1_local_1,08:00:00,08:00:00,127N,1,0,0
2_late_1,01:10:00,01:10:00,640N,1,0,0
2_late_1,01:16:00,01:16:00,631N,2,0,0
4_express_1,08:00:00,08:00:00,640N,1,0,0
4_express_1,08:06:00,08:06:00,631N,2,0,0
5_express_1,08:02:00,08:02:00,631N,1,0,0
5_express_2,09:02:00,09:02:00,631S,1,0,0
6_local_1,08:00:00,08:00:00,640N,1,0,0
6_local_1,08:12:00,08:12:00,631N,2,0,0
6X_express_1,08:20:00,08:20:00,631N,1,0,0
7_local_1,08:00:00,08:00:00,127N,1,0,0
7_local_1,08:04:00,08:04:00,723N,2,0,0
7X_express_1,08:10:00,08:10:00,127N,1,0,0
7X_express_1,08:13:00,08:13:00,723N,2,0,0
A_express_1,08:00:00,08:00:00,A27N,1,0,0
GS_shuttle_1,08:00:00,08:00:00,902N,1,0,0
GS_shuttle_1,08:03:00,08:03:00,901N,2,0,0
L_local_1,08:00:00,08:00:00,L06N,1,0,0
ghost_trip,08:00:00,08:00:00,631N,1,0,0
6_local_1,08:30:00,08:30:00,999N,3,0,0
";

/// The route ids serving Grand Central - 42 St in the fixture.
pub(crate) const GRAND_CENTRAL_ROUTES: [&str; 8] = ["2", "4", "5", "6", "6X", "7", "7X", "GS"];

pub(crate) fn write_table(dir: &Path, file: &str, contents: &str) {
    std::fs::write(dir.join(file), contents).unwrap();
}

pub(crate) fn nyc_subway() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_table(dir.path(), "routes.txt", ROUTES);
    write_table(dir.path(), "stops.txt", STOPS);
    write_table(dir.path(), "trips.txt", TRIPS);
    write_table(dir.path(), "stop_times.txt", STOP_TIMES);
    dir
}

pub(crate) fn nyc_index() -> FeedIndex {
    let dir = nyc_subway();
    loader::load(dir.path()).unwrap()
}
