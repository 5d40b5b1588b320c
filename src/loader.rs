//! Reads a feed folder into a [`FeedIndex`].

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::FeedLoadError;
use crate::gtfs::{self, Feed, Table};
use crate::index::FeedIndex;

/// Load the four tables under `folder` and index them.
pub fn load(folder: impl AsRef<Path>) -> Result<FeedIndex, FeedLoadError> {
    load_feed(folder).map(FeedIndex::from)
}

/// Load the four tables under `folder` without indexing them.
pub fn load_feed(folder: impl AsRef<Path>) -> Result<Feed, FeedLoadError> {
    let folder = folder.as_ref();
    if !folder.is_dir() {
        return Err(FeedLoadError::NotADirectory {
            path: folder.to_path_buf(),
        });
    }

    // A missing table fails the load before any table is parsed.
    for table in Table::ALL {
        if !folder.join(table.file_name()).is_file() {
            return Err(FeedLoadError::MissingFile {
                file: table.file_name().to_string(),
            });
        }
    }

    info!("Loading feed from {}", folder.display());
    let stops = read_table::<gtfs::Stop>(folder, Table::Stops)?;
    let routes = read_table::<gtfs::Route>(folder, Table::Routes)?;
    let trips = read_table::<gtfs::Trip>(folder, Table::Trips)?;
    let stop_times = read_table::<gtfs::StopTime>(folder, Table::StopTimes)?;

    Ok(Feed {
        stops,
        routes,
        trips,
        stop_times,
    })
}

fn read_table<T: DeserializeOwned>(folder: &Path, table: Table) -> Result<Vec<T>, FeedLoadError> {
    let file = table.file_name();
    let unreadable = |source: csv::Error| FeedLoadError::Unreadable {
        file: file.to_string(),
        source,
    };

    debug!("Processing {file}");
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(folder.join(file))
        .map_err(unreadable)?;

    let headers = reader.headers().map_err(unreadable)?;
    if let Some(column) = table
        .required_columns()
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(FeedLoadError::MissingColumn {
            file: file.to_string(),
            column: column.to_string(),
        });
    }

    let rows = reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(unreadable)?;
    debug!("Read {} rows from {file}", rows.len());
    Ok(rows)
}
