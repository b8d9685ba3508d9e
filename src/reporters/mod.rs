//! Descriptive statistics over a filtered trip table.
//!
//! Each pass is a pure function of a [`TripTable`](crate::trip::TripTable)
//! that returns a [`Report`]; rendering and timing live in
//! [`output`](crate::output).

pub mod duration;
pub mod station;
pub mod time;
pub mod types;
pub mod user;
pub mod utility;

use serde::Serialize;
use std::fmt;

pub use duration::duration_stats;
pub use station::station_stats;
pub use time::time_stats;
pub use user::user_stats;

/// A computed statistics report: printable for the console and
/// serializable for structured logs.
pub trait Report: Serialize + fmt::Display {
    /// Line printed before the report is computed.
    const HEADING: &'static str;
}
