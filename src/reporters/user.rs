use crate::reporters::types::{BirthYearStats, UserStats};
use crate::reporters::utility::{mode, value_counts};
use crate::trip::TripTable;

/// User-type counts, plus gender counts and birth-year figures for cities
/// whose data carries those columns. Missing cells are skipped.
#[tracing::instrument(skip_all, fields(trips = table.len(), city = %table.city))]
pub fn user_stats(table: &TripTable) -> UserStats {
    let user_types = owned_counts(table.trips.iter().filter_map(|t| t.user_type.as_deref()));

    let gender = table
        .has_gender
        .then(|| owned_counts(table.trips.iter().filter_map(|t| t.gender.as_deref())));

    let birth_year = table.has_birth_year.then(|| {
        let years: Vec<i32> = table.trips.iter().filter_map(|t| t.birth_year).collect();
        BirthYearStats {
            earliest: years.iter().min().copied(),
            most_recent: years.iter().max().copied(),
            most_common: mode(years.iter().copied()),
        }
    });

    UserStats {
        user_types,
        gender,
        birth_year,
    }
}

fn owned_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    value_counts(values)
        .into_iter()
        .map(|(v, n)| (v.to_string(), n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::City;
    use crate::loader::read_trips;

    #[test]
    fn test_user_stats_with_demographics() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-01-02 08:00:00,60,A,B,Subscriber,Male,1985.0
2017-01-02 09:00:00,60,A,B,Subscriber,Female,1992.0
2017-01-02 10:00:00,60,A,B,Customer,,
2017-01-02 11:00:00,60,A,B,Subscriber,Male,1992.0
2017-01-02 12:00:00,60,A,B,,Male,1939.0
";
        let table = read_trips(City::Chicago, csv.as_bytes()).unwrap();
        let stats = user_stats(&table);

        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 1)]
        );
        assert_eq!(
            stats.gender,
            Some(vec![("Male".to_string(), 3), ("Female".to_string(), 1)])
        );
        assert_eq!(
            stats.birth_year,
            Some(BirthYearStats {
                earliest: Some(1939),
                most_recent: Some(1992),
                most_common: Some(1992),
            })
        );
    }

    #[test]
    fn test_user_stats_without_demographics() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,60,A,B,Subscriber
2017-01-02 09:00:00,60,A,B,Customer
";
        let table = read_trips(City::Washington, csv.as_bytes()).unwrap();
        let stats = user_stats(&table);

        assert_eq!(stats.gender, None);
        assert_eq!(stats.birth_year, None);
        assert_eq!(stats.user_types.len(), 2);
    }

    #[test]
    fn test_user_stats_empty_columns_present() {
        let csv = "Start Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year\n";
        let table = read_trips(City::NewYorkCity, csv.as_bytes()).unwrap();
        let stats = user_stats(&table);

        assert_eq!(stats.gender, Some(vec![]));
        assert_eq!(
            stats.birth_year,
            Some(BirthYearStats {
                earliest: None,
                most_recent: None,
                most_common: None,
            })
        );
    }
}
