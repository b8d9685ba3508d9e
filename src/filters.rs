//! City, month and day selections collected from the user.
//!
//! Each field parses from lowercase text with [`FromStr`], so a
//! [`Selection`] can only ever hold one of the fixed allowed values.

use anyhow::{Result, bail};
use chrono::Weekday;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Month names accepted as a filter, in calendar order.
pub static MONTH_NAMES: &[&str] = &["january", "february", "march", "april", "may", "june"];

/// Weekday display names, Monday first. Hardcoded so matching never depends
/// on locale formatting.
pub static DAY_NAMES: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// File name of the city's trip data, relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            City::Chicago => "Chicago",
            City::NewYorkCity => "New York City",
            City::Washington => "Washington",
        };
        f.write_str(name)
    }
}

impl FromStr for City {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match City::ALL.into_iter().find(|city| city.name() == s) {
            Some(city) => Ok(city),
            None => bail!("unknown city '{s}'"),
        }
    }
}

/// Month filter: either no restriction or one of the first six months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthFilter {
    All,
    /// Calendar month number, 1 (January) through 6 (June).
    Only(u32),
}

impl MonthFilter {
    pub fn matches(self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m == month,
        }
    }
}

impl FromStr for MonthFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            return Ok(MonthFilter::All);
        }
        match MONTH_NAMES.iter().position(|name| *name == s) {
            Some(idx) => Ok(MonthFilter::Only(idx as u32 + 1)),
            None => bail!("unknown month '{s}'"),
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Only(m) => f.write_str(month_name(*m)),
        }
    }
}

/// Returns the English name of a calendar month (1-based), or `"unknown"`.
pub fn month_name(month: u32) -> &'static str {
    chrono::Month::try_from(month as u8)
        .map(|m| m.name())
        .unwrap_or("unknown")
}

/// Day of the week, ordered Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn name(self) -> &'static str {
        DAY_NAMES[self as usize]
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Day {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match Day::ALL
            .into_iter()
            .find(|day| day.name().eq_ignore_ascii_case(s))
        {
            Some(day) => Ok(day),
            None => bail!("unknown day '{s}'"),
        }
    }
}

/// Day filter: either no restriction or a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayFilter {
    All,
    Only(Day),
}

impl DayFilter {
    pub fn matches(self, day: Day) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => d == day,
        }
    }
}

impl FromStr for DayFilter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            return Ok(DayFilter::All);
        }
        Ok(DayFilter::Only(s.parse()?))
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Only(d) => write!(f, "{d}"),
        }
    }
}

/// A validated (city, month, day) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}
