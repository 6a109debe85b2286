//! Interactive exploration loop.

use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::table::TripTable;
use crate::ui::pager::RawPager;
use crate::ui::prompt::Prompter;
use crate::ui::render::write_report;
use log::info;
use std::io::{BufRead, Write};

const LEAVING_RAW: &str = "You typed something other than \"yes\" - now exiting the raw data view!";

pub struct Shell<R, W> {
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            prompter: Prompter::new(input, output),
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run cycles until the user declines to restart.
    /// A dataset load failure ends the loop with the error.
    pub fn run(&mut self, cfg: &Config) -> AppResult<()> {
        loop {
            self.cycle(cfg)?;

            if !self.prompter.confirm("\nWould you like to restart? Enter yes or no.\n")? {
                writeln!(
                    self.prompter.output(),
                    "\nYou typed something other than \"yes\" - now exiting the program! Thanks for your time.\n"
                )?;
                return Ok(());
            }
        }
    }

    fn cycle(&mut self, cfg: &Config) -> AppResult<()> {
        let out = self.prompter.output();
        writeln!(out, "Hello! Let's explore some US bikeshare data!")?;

        let city = self.prompter.ask_city()?;
        let selector = self.prompter.ask_selector()?;
        writeln!(self.prompter.output(), "{}", cfg.separator())?;

        info!("cycle: city={} month={} day={}", city, selector.month, selector.day);
        let table = Core::load_filtered(city, &selector, &cfg.data_path())?;

        write_report(self.prompter.output(), &table, &selector, cfg)?;
        self.view_raw(&table, cfg.page_size)
    }

    fn view_raw(&mut self, table: &TripTable, page_size: usize) -> AppResult<()> {
        let question = format!(
            "\nWould you like to see the first {page_size} rows of data? Please enter yes or no:\n"
        );
        if !self.prompter.confirm(&question)? {
            writeln!(self.prompter.output(), "{LEAVING_RAW} Thanks for your time.")?;
            return Ok(());
        }

        let mut pager = RawPager::new(
            table.trips(),
            table.city().has_demographics(),
            page_size,
        );
        let next_question = format!(
            "\nWould you like to see the next {page_size} rows of data? Please enter yes or no:\n"
        );

        loop {
            match pager.next_page() {
                Some(page) => write!(self.prompter.output(), "{page}")?,
                None => {
                    writeln!(self.prompter.output(), "No rows to show.")?;
                    return Ok(());
                }
            }

            if pager.is_exhausted() {
                writeln!(self.prompter.output(), "\nNo more rows - end of the raw data view.\n")?;
                return Ok(());
            }

            if !self.prompter.confirm(&next_question)? {
                writeln!(self.prompter.output(), "{LEAVING_RAW}\n")?;
                return Ok(());
            }
        }
    }
}
