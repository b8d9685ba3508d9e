//! The interactive session loop.

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use crate::config::Config;
use crate::loader::load_data;
use crate::output::print_report;
use crate::pager::display_raw_data;
use crate::prompt::{Answer, Prompter};
use crate::reporters::{duration_stats, station_stats, time_stats, user_stats};

const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";
const RESTART_RETRY: &str = "\nIncorrect value! Please enter yes or no: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Terminated,
}

/// Drives filter collection, loading, reporting and paging until the user
/// declines to restart.
pub struct Session<R, W> {
    config: Config,
    prompter: Prompter<R, W>,
    state: SessionState,
    rounds: usize,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: Config, input: R, output: W) -> Self {
        Self {
            config,
            prompter: Prompter::new(input, output),
            state: SessionState::Running,
            rounds: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of completed rounds.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Runs rounds until the session is terminated.
    ///
    /// # Errors
    ///
    /// Returns the first load or I/O failure; nothing is retried.
    pub fn run(&mut self) -> Result<()> {
        while self.state == SessionState::Running {
            self.state = self.run_round()?;
        }
        info!(rounds = self.rounds, "Session finished");
        Ok(())
    }

    /// One full round, returning the state chosen at the restart prompt.
    #[tracing::instrument(skip(self), fields(round = self.rounds + 1))]
    fn run_round(&mut self) -> Result<SessionState> {
        let selection = self.prompter.collect_filters()?;
        info!(city = %selection.city, month = %selection.month, day = %selection.day, "Filters selected");

        let table = load_data(&self.config.data_dir, &selection)?;

        let out = self.prompter.output();
        print_report(out, || time_stats(&table))?;
        print_report(out, || station_stats(&table))?;
        print_report(out, || duration_stats(&table))?;
        print_report(out, || user_stats(&table))?;

        display_raw_data(&mut self.prompter, &table)?;
        self.rounds += 1;

        let next = match self.prompter.ask_yes_no(RESTART_PROMPT, RESTART_RETRY)? {
            Answer::Yes => SessionState::Running,
            Answer::No => SessionState::Terminated,
        };
        Ok(next)
    }
}
