use crate::reporters::types::StationStats;
use crate::reporters::utility::mode;
use crate::trip::TripTable;

/// Most used start station, end station and start/end combination.
///
/// The combination is built per trip as `"<start>-<end>"`; the table itself
/// is left untouched.
#[tracing::instrument(skip_all, fields(trips = table.len()))]
pub fn station_stats(table: &TripTable) -> StationStats {
    StationStats {
        start_station: mode(table.trips.iter().map(|t| t.start_station.as_str())).map(str::to_owned),
        end_station: mode(table.trips.iter().map(|t| t.end_station.as_str())).map(str::to_owned),
        route: mode(table.trips.iter().map(|t| t.route())),
    }
}
