//! Pages through the raw trip rows on request.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::output::write_rows;
use crate::prompt::{Answer, Prompter};
use crate::trip::{Trip, TripTable};

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

const FIRST_PROMPT: &str = "Do you want to print 5 rows of raw data? ";
const NEXT_PROMPT: &str = "Do you want to print next 5 rows of raw data? ";
const RETRY_PROMPT: &str = "Incorrect value! Please answer yes or no: ";

/// Cursor over a table's rows, advancing one page at a time.
#[derive(Debug, Default)]
pub struct Pager {
    offset: usize,
}

impl Pager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the first row the next page will show.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the next page and advances past it. The last page may hold
    /// fewer than [`PAGE_SIZE`] rows; after that every page is empty.
    pub fn next_page<'a>(&mut self, table: &'a TripTable) -> &'a [Trip] {
        let start = self.offset.min(table.len());
        let end = (start + PAGE_SIZE).min(table.len());
        self.offset += PAGE_SIZE;
        &table.trips[start..end]
    }

    pub fn is_exhausted(&self, table: &TripTable) -> bool {
        self.offset >= table.len()
    }
}

/// Asks whether to show raw rows and prints one page per "yes" until the
/// user answers "no" or the table runs out. Returns the number of rows
/// printed.
pub fn display_raw_data<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    table: &TripTable,
) -> Result<usize> {
    let mut pager = Pager::new();
    let mut shown = 0;
    let mut prompt = FIRST_PROMPT;

    while prompter.ask_yes_no(prompt, RETRY_PROMPT)? == Answer::Yes {
        let page = pager.next_page(table);
        if page.is_empty() {
            writeln!(prompter.output(), "No trips to display.")?;
        } else {
            write_rows(prompter.output(), table, page)?;
        }
        shown += page.len();
        debug!(offset = pager.offset(), shown, "Raw data page printed");

        if pager.is_exhausted(table) {
            break;
        }
        prompt = NEXT_PROMPT;
    }

    Ok(shown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::City;
    use crate::loader::read_trips;
    use std::io::Cursor;

    fn table(rows: usize) -> TripTable {
        let mut csv = String::from("Start Time,Trip Duration,Start Station,End Station,User Type\n");
        for i in 0..rows {
            csv.push_str(&format!("2017-01-02 08:00:00,{i},S{i},E{i},Subscriber\n"));
        }
        read_trips(City::Washington, csv.as_bytes()).unwrap()
    }

    fn run(input: &str, table: &TripTable) -> (usize, String) {
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let shown = display_raw_data(&mut prompter, table).unwrap();
        let out = String::from_utf8(prompter.output().clone()).unwrap();
        (shown, out)
    }

    #[test]
    fn test_next_page_advances_by_five() {
        let table = table(12);
        let mut pager = Pager::new();

        assert_eq!(pager.next_page(&table)[0].index, 0);
        assert_eq!(pager.offset(), 5);
        assert_eq!(pager.next_page(&table)[0].index, 5);

        let last = pager.next_page(&table);
        assert_eq!(last.len(), 2);
        assert_eq!(last[0].index, 10);
        assert!(pager.is_exhausted(&table));
        assert!(pager.next_page(&table).is_empty());
    }

    #[test]
    fn test_no_stops_immediately() {
        let (shown, out) = run("no\n", &table(12));
        assert_eq!(shown, 0);
        assert!(!out.contains("Start Time"));
    }

    #[test]
    fn test_yes_yes_no() {
        let (shown, out) = run("yes\nyes\nno\n", &table(12));
        assert_eq!(shown, 10);
        assert!(out.contains("S0,E0"));
        assert!(out.contains("S9,E9"));
        assert!(!out.contains("S10,E10"));
        assert_eq!(out.matches(NEXT_PROMPT).count(), 2);
    }

    #[test]
    fn test_invalid_answer_reprompts() {
        let (shown, out) = run("sure\nyes\nno\n", &table(3));
        assert_eq!(shown, 3);
        assert!(out.contains(RETRY_PROMPT));
    }

    #[test]
    fn test_stops_when_table_runs_out() {
        // no answer after the final page is needed
        let (shown, out) = run("yes\n", &table(4));
        assert_eq!(shown, 4);
        assert!(!out.contains(NEXT_PROMPT));
    }

    #[test]
    fn test_empty_table() {
        let (shown, out) = run("yes\n", &table(0));
        assert_eq!(shown, 0);
        assert!(out.contains("No trips to display."));
    }
}
