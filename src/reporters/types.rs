//! Report values produced by the statistics passes.

use serde::Serialize;
use std::fmt;

use crate::filters::{Day, month_name};
use crate::reporters::Report;
use crate::reporters::utility::humanize_seconds;

const NO_DATA: &str = "no data";

/// Most frequent times of travel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeStats {
    pub month: Option<u32>,
    pub day_of_week: Option<Day>,
    pub start_hour: Option<u32>,
}

/// Most popular stations and route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub route: Option<String>,
}

/// Total and average trip duration, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub trips: usize,
    pub total_seconds: f64,
    /// `None` when no trips matched.
    pub mean_seconds: Option<f64>,
}

/// Birth-year extremes and mode over the trips that carry one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub most_recent: Option<i32>,
    pub most_common: Option<i32>,
}

/// User demographics. `gender` and `birth_year` are `None` when the city's
/// data has no such column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub gender: Option<Vec<(String, usize)>>,
    pub birth_year: Option<BirthYearStats>,
}

fn or_no_data<T: fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => NO_DATA.to_string(),
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, label: &str, counts: &[(String, usize)]) -> fmt::Result {
    if counts.is_empty() {
        return writeln!(f, "{label}: {NO_DATA}");
    }
    writeln!(f, "{label}:")?;
    for (value, count) in counts {
        writeln!(f, "    {value}: {count}")?;
    }
    Ok(())
}

impl Report for TimeStats {
    const HEADING: &'static str = "Calculating The Most Frequent Times of Travel...";
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = self.month.map(month_name);
        writeln!(f, "The most common month: {}", or_no_data(&month))?;
        writeln!(f, "The most common day of week: {}", or_no_data(&self.day_of_week))?;
        writeln!(f, "The most common start hour: {}", or_no_data(&self.start_hour))
    }
}

impl Report for StationStats {
    const HEADING: &'static str = "Calculating The Most Popular Stations and Trip...";
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Most commonly used start station: {}", or_no_data(&self.start_station))?;
        writeln!(f, "Most commonly used end station: {}", or_no_data(&self.end_station))?;
        writeln!(
            f,
            "Most frequent combination of start and end station trip: {}",
            or_no_data(&self.route)
        )
    }
}

impl Report for DurationStats {
    const HEADING: &'static str = "Calculating Trip Duration...";
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total travel time: {} seconds ({})",
            self.total_seconds,
            humanize_seconds(self.total_seconds)
        )?;
        match self.mean_seconds {
            Some(mean) => writeln!(
                f,
                "Mean travel time: {mean:.2} seconds ({})",
                humanize_seconds(mean)
            ),
            None => writeln!(f, "Mean travel time: n/a (no trips)"),
        }
    }
}

impl Report for UserStats {
    const HEADING: &'static str = "Calculating User Stats...";
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_counts(f, "Counts of user types", &self.user_types)?;

        match &self.gender {
            Some(counts) => write_counts(f, "Counts of gender", counts)?,
            None => writeln!(f, "This city doesn't have information about the Gender!")?,
        }

        match &self.birth_year {
            Some(years) => {
                writeln!(f, "Earliest year of birth: {}", or_no_data(&years.earliest))?;
                writeln!(f, "Most recent year of birth: {}", or_no_data(&years.most_recent))?;
                writeln!(f, "Most common year of birth: {}", or_no_data(&years.most_common))
            }
            None => writeln!(f, "This city doesn't have information about the Birth Year!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_stats_display() {
        let stats = TimeStats {
            month: Some(6),
            day_of_week: Some(Day::Wednesday),
            start_hour: Some(17),
        };
        let text = stats.to_string();
        assert!(text.contains("The most common month: June"));
        assert!(text.contains("The most common day of week: Wednesday"));
        assert!(text.contains("The most common start hour: 17"));
    }

    #[test]
    fn test_empty_time_stats_display() {
        let stats = TimeStats {
            month: None,
            day_of_week: None,
            start_hour: None,
        };
        assert_eq!(stats.to_string().matches(NO_DATA).count(), 3);
    }

    #[test]
    fn test_duration_display_without_trips() {
        let stats = DurationStats {
            trips: 0,
            total_seconds: 0.0,
            mean_seconds: None,
        };
        let text = stats.to_string();
        assert!(text.contains("Total travel time: 0 seconds"));
        assert!(text.contains("n/a"));
        assert!(!text.contains("NaN"));
    }

    #[test]
    fn test_user_stats_notices() {
        let stats = UserStats {
            user_types: vec![("Subscriber".to_string(), 2)],
            gender: None,
            birth_year: None,
        };
        let text = stats.to_string();
        assert!(text.contains("    Subscriber: 2"));
        assert!(text.contains("doesn't have information about the Gender!"));
        assert!(text.contains("doesn't have information about the Birth Year!"));
        assert!(!text.contains("Counts of gender"));
    }
}
