//! Loads a city's trip file and applies the month/day filters.

use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::filters::{City, Selection};
use crate::trip::{COL_BIRTH_YEAR, COL_GENDER, REQUIRED_COLUMNS, RawTrip, Trip, TripTable};

/// Path of the city's trip file inside `data_dir`.
pub fn city_path(data_dir: &Path, city: City) -> PathBuf {
    data_dir.join(city.file_name())
}

/// Reads the selected city's file and keeps the trips matching the
/// selection's month and day.
///
/// The file is re-read on every call, so repeated calls with the same
/// selection return identical tables.
///
/// # Errors
///
/// Fails if the file is missing or unreadable, lacks a required column, or
/// contains a row that cannot be parsed.
#[tracing::instrument(skip(data_dir, selection), fields(city = %selection.city, month = %selection.month, day = %selection.day))]
pub fn load_data(data_dir: &Path, selection: &Selection) -> Result<TripTable> {
    let path = city_path(data_dir, selection.city);
    let file = File::open(&path)
        .with_context(|| format!("failed to open trip data at {}", path.display()))?;

    let table = read_trips(selection.city, file)
        .with_context(|| format!("failed to load trip data from {}", path.display()))?;
    let total = table.len();

    let filtered = filter_trips(table, selection);
    info!(total, kept = filtered.len(), "Trip data loaded");

    Ok(filtered)
}

/// Parses an entire city CSV into an unfiltered [`TripTable`].
pub fn read_trips<R: Read>(city: City, reader: R) -> Result<TripTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);

    for &column in REQUIRED_COLUMNS {
        if !has_column(column) {
            bail!("missing required column '{column}'");
        }
    }
    let has_gender = has_column(COL_GENDER);
    let has_birth_year = has_column(COL_BIRTH_YEAR);
    debug!(?headers, has_gender, has_birth_year, "CSV headers read");

    let mut trips = Vec::new();
    for (index, result) in rdr.deserialize().enumerate() {
        let raw: RawTrip = result.with_context(|| format!("invalid trip record at row {index}"))?;
        trips.push(Trip::from_raw(index, raw));
    }

    Ok(TripTable {
        city,
        has_gender,
        has_birth_year,
        trips,
    })
}

/// Keeps only the trips whose derived month and weekday match `selection`.
pub fn filter_trips(mut table: TripTable, selection: &Selection) -> TripTable {
    table
        .trips
        .retain(|t| selection.month.matches(t.month) && selection.day.matches(t.day_of_week));
    table
}
