use crate::reporters::types::DurationStats;
use crate::reporters::utility::mean;
use crate::trip::TripTable;

/// Sum and mean of the trip durations.
#[tracing::instrument(skip_all, fields(trips = table.len()))]
pub fn duration_stats(table: &TripTable) -> DurationStats {
    let durations: Vec<f64> = table.trips.iter().map(|t| t.trip_duration).collect();

    DurationStats {
        trips: durations.len(),
        total_seconds: durations.iter().sum(),
        mean_seconds: mean(&durations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::City;
    use crate::loader::read_trips;

    #[test]
    fn test_duration_stats() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,100,A,B,Subscriber
2017-01-02 09:00:00,250.5,A,B,Subscriber
2017-01-02 10:00:00,49.5,A,B,Customer
";
        let table = read_trips(City::Washington, csv.as_bytes()).unwrap();
        let stats = duration_stats(&table);

        let manual: f64 = table.trips.iter().map(|t| t.trip_duration).sum();
        assert_eq!(stats.trips, 3);
        assert_eq!(stats.total_seconds, manual);
        assert_eq!(stats.total_seconds, 400.0);
        assert_eq!(stats.mean_seconds, Some(400.0 / 3.0));
    }

    #[test]
    fn test_duration_stats_zero_rows() {
        let csv = "Start Time,Trip Duration,Start Station,End Station,User Type\n";
        let table = read_trips(City::Washington, csv.as_bytes()).unwrap();
        let stats = duration_stats(&table);

        assert_eq!(stats.trips, 0);
        assert_eq!(stats.total_seconds, 0.0);
        assert_eq!(stats.mean_seconds, None);
    }
}
