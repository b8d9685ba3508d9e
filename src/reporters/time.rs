use crate::reporters::types::TimeStats;
use crate::reporters::utility::mode;
use crate::trip::TripTable;

/// Most common month, weekday and start hour.
#[tracing::instrument(skip_all, fields(trips = table.len()))]
pub fn time_stats(table: &TripTable) -> TimeStats {
    TimeStats {
        month: mode(table.trips.iter().map(|t| t.month)),
        day_of_week: mode(table.trips.iter().map(|t| t.day_of_week)),
        start_hour: mode(table.trips.iter().map(|t| t.start_hour())),
    }
}
