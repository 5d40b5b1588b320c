use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, error};
use passing_routes::{passing_routes, MatchConfig};

/// Print the routes passing through a station.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Location of the GTFS data folder
    #[arg(long, alias = "db_folder", default_value = "./GTFS")]
    db_folder: PathBuf,

    /// The target station; prompted for when omitted
    #[arg(long, alias = "station_name")]
    station_name: Option<String>,

    /// Turn on debug logging
    #[arg(long)]
    debug: bool,

    /// Match station names regardless of case
    #[arg(long)]
    ignore_case: bool,

    /// Let an empty station name match every stop
    #[arg(long)]
    empty_matches_all: bool,
}

fn prompt_station_name() -> io::Result<String> {
    print!("station name: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let station_name = match args.station_name {
        Some(name) => name,
        None => match prompt_station_name() {
            Ok(name) => name,
            Err(err) => {
                error!("Unable to read station name: {err}");
                process::exit(1);
            }
        },
    };

    let config = MatchConfig::new(!args.ignore_case, args.empty_matches_all);
    let result = match passing_routes(&args.db_folder, &station_name, &config) {
        Ok(result) => result,
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    };
    debug!("{}", result.diagnostics);

    println!("{:?}", result.route_ids);
}
