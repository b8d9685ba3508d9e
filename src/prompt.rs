//! Interactive prompts that re-ask until the answer is one of the allowed
//! values.

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

use crate::filters::{City, DayFilter, MonthFilter, Selection};
use crate::output::separator;

const CITY_PROMPT: &str = "Please enter Chicago, Washington or New York City for your analysis: ";
const MONTH_PROMPT: &str = "Enter any one of the first 6 months or enter All to select all 6 months: ";
const DAY_PROMPT: &str = "Please enter day of the week or enter All to select all days: ";

/// A yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

impl FromStr for Answer {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "yes" => Ok(Answer::Yes),
            "no" => Ok(Answer::No),
            other => bail!("expected yes or no, got '{other}'"),
        }
    }
}

/// Reads answers from `input` and writes prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Console the prompts are written to, for callers that print between
    /// questions.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `prompt` and returns the next line, trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Fails if the input is closed or cannot be read.
    pub fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        // undecodable bytes become U+FFFD and fail validation like any typo
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            bail!("input stream closed");
        }
        Ok(String::from_utf8_lossy(&line).trim().to_lowercase())
    }

    /// Asks `prompt`, then `retry` after every answer that does not parse
    /// as `T`, until one does.
    pub fn ask<T: FromStr>(&mut self, prompt: &str, retry: &str) -> Result<T> {
        let mut answer = self.read_answer(prompt)?;
        loop {
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    debug!(answer = %answer, "Rejected input");
                    answer = self.read_answer(retry)?;
                }
            }
        }
    }

    pub fn ask_yes_no(&mut self, prompt: &str, retry: &str) -> Result<Answer> {
        self.ask(prompt, retry)
    }

    /// Collects a city, month and day from the user.
    pub fn collect_filters(&mut self) -> Result<Selection> {
        writeln!(self.output, "Hello! Let's explore some US bikeshare data!")?;

        let city: City = self.ask(CITY_PROMPT, &format!("Incorrect city name! {CITY_PROMPT}"))?;
        let month: MonthFilter =
            self.ask(MONTH_PROMPT, &format!("Incorrect month name! {MONTH_PROMPT}"))?;
        let day: DayFilter = self.ask(DAY_PROMPT, &format!("Incorrect day name! {DAY_PROMPT}"))?;

        writeln!(self.output, "{}", separator())?;
        Ok(Selection { city, month, day })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::Day;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_read_answer_normalizes() {
        let mut p = prompter("  New York City  \n");
        assert_eq!(p.read_answer("> ").unwrap(), "new york city");
    }

    #[test]
    fn test_read_answer_closed_input() {
        let mut p = prompter("");
        let err = p.read_answer("> ").unwrap_err();
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_ask_reprompts_until_valid() {
        let mut p = prompter("boston\n\nparis\nChicago\n");
        let city: City = p.ask("city? ", "again? ").unwrap();
        assert_eq!(city, City::Chicago);

        let shown = String::from_utf8(p.output.clone()).unwrap();
        assert_eq!(shown.matches("again? ").count(), 3);
        assert_eq!(shown.matches("city? ").count(), 1);
    }

    #[test]
    fn test_ask_rejects_invalid_utf8() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"chicago\n");
        let mut p = Prompter::new(Cursor::new(input), Vec::new());

        let city: City = p.ask("city? ", "again? ").unwrap();
        assert_eq!(city, City::Chicago);

        let shown = String::from_utf8(p.output.clone()).unwrap();
        assert_eq!(shown.matches("again? ").count(), 1);
    }

    #[test]
    fn test_collect_filters() {
        let mut p = prompter("WASHINGTON\nfebruray\nFebruary\nfunday\nall\n");
        let selection = p.collect_filters().unwrap();
        assert_eq!(
            selection,
            Selection {
                city: City::Washington,
                month: MonthFilter::Only(2),
                day: DayFilter::All,
            }
        );

        let shown = String::from_utf8(p.output.clone()).unwrap();
        assert!(shown.contains("Incorrect month name!"));
        assert!(shown.contains("Incorrect day name!"));
        assert!(!shown.contains("Incorrect city name!"));
    }

    #[test]
    fn test_collect_filters_day() {
        let mut p = prompter("chicago\nmarch\nMonday\n");
        let selection = p.collect_filters().unwrap();
        assert_eq!(selection.day, DayFilter::Only(Day::Monday));
    }

    #[test]
    fn test_yes_no() {
        let mut p = prompter("maybe\nYES\n");
        assert_eq!(p.ask_yes_no("? ", "yes or no: ").unwrap(), Answer::Yes);

        let mut p = prompter("no\n");
        assert_eq!(p.ask_yes_no("? ", "yes or no: ").unwrap(), Answer::No);
    }
}
