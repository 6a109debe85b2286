//! Line-based prompts with unbounded re-asking on invalid input.

use crate::errors::{AppError, AppResult};
use crate::models::city::City;
use crate::models::selector::{DayFilter, MonthFilter, Selector};
use std::io::{BufRead, Write};

const INVALID: &str = "\n That's not a valid response!";

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `question` and read one line. End of input is an error.
    fn read_answer(&mut self, question: &str) -> AppResult<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    /// Ask until `parse` accepts the answer, then echo the accepted value.
    pub fn ask<T, F>(&mut self, question: &str, parse: F) -> AppResult<T>
    where
        T: std::fmt::Display,
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let answer = self.read_answer(question)?;
            match parse(&answer) {
                Some(v) => {
                    writeln!(self.output, "\"{v}\" it will be!")?;
                    return Ok(v);
                }
                None => writeln!(self.output, "{INVALID}")?,
            }
        }
    }

    pub fn ask_city(&mut self) -> AppResult<City> {
        self.ask(
            "Would you like to see data from Chicago, New York City, or Washington?\n",
            City::from_input,
        )
    }

    pub fn ask_month(&mut self) -> AppResult<MonthFilter> {
        self.ask(
            "Please enter the month (January, February, ..., December) for which you would like to see data, or \"all\" to see data for all months.\n",
            MonthFilter::from_input,
        )
    }

    pub fn ask_day(&mut self) -> AppResult<DayFilter> {
        self.ask(
            "Please enter the day of week (e.g. Monday, Tuesday, etc.) for which you would like to see data, or \"all\" to see data for all days.\n",
            DayFilter::from_input,
        )
    }

    pub fn ask_selector(&mut self) -> AppResult<Selector> {
        let month = self.ask_month()?;
        let day = self.ask_day()?;
        Ok(Selector::new(month, day))
    }

    /// `yes` / `y` (any case) affirms, anything else declines.
    pub fn confirm(&mut self, question: &str) -> AppResult<bool> {
        let answer = self.read_answer(question)?.to_ascii_lowercase();
        Ok(answer == "yes" || answer == "y")
    }
}
