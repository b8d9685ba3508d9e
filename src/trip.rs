//! Trip records and the per-city trip table.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer};

use crate::filters::{City, Day};

/// Timestamp layouts found in the trip exports.
const TIMESTAMP_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S"];

pub const COL_START_TIME: &str = "Start Time";
pub const COL_END_TIME: &str = "End Time";
pub const COL_TRIP_DURATION: &str = "Trip Duration";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

/// Columns every city file must carry.
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_START_TIME,
    COL_TRIP_DURATION,
    COL_START_STATION,
    COL_END_STATION,
    COL_USER_TYPE,
];

/// A single row as it appears in a city CSV file.
#[derive(Debug, Deserialize)]
pub(crate) struct RawTrip {
    #[serde(rename = "Start Time", deserialize_with = "de_timestamp")]
    start_time: NaiveDateTime,
    #[serde(rename = "End Time", default, deserialize_with = "de_opt_timestamp")]
    end_time: Option<NaiveDateTime>,
    #[serde(rename = "Trip Duration")]
    trip_duration: f64,
    #[serde(rename = "Start Station")]
    start_station: String,
    #[serde(rename = "End Station")]
    end_station: String,
    #[serde(rename = "User Type", default)]
    user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    gender: Option<String>,
    #[serde(rename = "Birth Year", default, deserialize_with = "de_opt_year")]
    birth_year: Option<i32>,
}

/// A trip with its derived month and weekday.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Zero-based row position in the source file.
    pub index: usize,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    /// Seconds.
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    pub month: u32,
    pub day_of_week: Day,
}

impl Trip {
    pub(crate) fn from_raw(index: usize, raw: RawTrip) -> Self {
        Trip {
            index,
            month: raw.start_time.month(),
            day_of_week: Day::from(raw.start_time.weekday()),
            start_time: raw.start_time,
            end_time: raw.end_time,
            trip_duration: raw.trip_duration,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: non_empty(raw.user_type),
            gender: non_empty(raw.gender),
            birth_year: raw.birth_year,
        }
    }

    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// The trip's start and end station joined as one route label.
    pub fn route(&self) -> String {
        format!("{}-{}", self.start_station, self.end_station)
    }
}

/// The (possibly filtered) trips of one city.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    pub city: City,
    pub has_gender: bool,
    pub has_birth_year: bool,
    pub trips: Vec<Trip>,
}

impl TripTable {
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Column headers for raw-data output, limited to what the city provides.
    pub fn columns(&self) -> Vec<&'static str> {
        let mut cols = vec![
            "",
            COL_START_TIME,
            COL_END_TIME,
            COL_TRIP_DURATION,
            COL_START_STATION,
            COL_END_STATION,
            COL_USER_TYPE,
        ];
        if self.has_gender {
            cols.push(COL_GENDER);
        }
        if self.has_birth_year {
            cols.push(COL_BIRTH_YEAR);
        }
        cols.push("month");
        cols.push("day_of_week");
        cols
    }

    /// Renders a trip as a record matching [`TripTable::columns`].
    pub fn record(&self, trip: &Trip) -> Vec<String> {
        let mut rec = vec![
            trip.index.to_string(),
            trip.start_time.to_string(),
            trip.end_time.map(|t| t.to_string()).unwrap_or_default(),
            trip.trip_duration.to_string(),
            trip.start_station.clone(),
            trip.end_station.clone(),
            trip.user_type.clone().unwrap_or_default(),
        ];
        if self.has_gender {
            rec.push(trip.gender.clone().unwrap_or_default());
        }
        if self.has_birth_year {
            rec.push(trip.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        rec.push(trip.month.to_string());
        rec.push(trip.day_of_week.to_string());
        rec
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub(crate) fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn de_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
    let s = String::deserialize(d)?;
    parse_timestamp(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{s}'")))
}

fn de_opt_timestamp<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDateTime>, D::Error> {
    let s = Option::<String>::deserialize(d)?.unwrap_or_default();
    if s.trim().is_empty() {
        return Ok(None);
    }
    parse_timestamp(&s)
        .map(Some)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{s}'")))
}

// Birth years are exported as floats ("1989.0") with blanks for unknown.
fn de_opt_year<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
    let s = Option::<String>::deserialize(d)?.unwrap_or_default();
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<f64>()
        .map(|y| Some(y as i32))
        .map_err(|_| serde::de::Error::custom(format!("invalid birth year '{s}'")))
}
