//! pages through the raw trips of a session.
use std::io::{BufRead, Write};

use bikeshare_core::{model::TripDataset, util::table, BikeshareError};

use crate::app::console::{Console, YesNo};

const VIEW_PROMPT: &str = "\nWould you like to view raw trip data? Enter 'yes' or 'no'.";

/// a `[start, stop)` window over the dataset that moves forward one page
/// per "yes". the window is not bounded by the dataset length; a window
/// past the end prints an empty table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawDataPager {
    start: usize,
    stop: usize,
    page_size: usize,
}

impl RawDataPager {
    pub fn new(page_size: usize) -> RawDataPager {
        RawDataPager {
            start: 0,
            stop: page_size,
            page_size,
        }
    }

    pub fn window(&self) -> (usize, usize) {
        (self.start, self.stop)
    }

    pub fn advance(&mut self) {
        self.start += self.page_size;
        self.stop += self.page_size;
    }

    /// asks whether to show raw data, then keeps offering the next page until
    /// the user says no. the more prompt follows either answer to the first
    /// one.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
        dataset: &TripDataset,
    ) -> Result<(), BikeshareError> {
        let more_prompt = format!(
            "\nWould you like to view {} more lines of raw trip data? Enter 'yes' or 'no'.",
            self.page_size
        );
        if console.prompt_until(VIEW_PROMPT, None, YesNo::parse)? == YesNo::Yes {
            self.print_window(console, dataset)?;
        }
        while console.prompt_until(&more_prompt, None, YesNo::parse)? == YesNo::Yes {
            self.advance();
            self.print_window(console, dataset)?;
        }
        Ok(())
    }

    fn print_window<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        dataset: &TripDataset,
    ) -> Result<(), BikeshareError> {
        let trips = dataset.window(self.start, self.stop);
        log::debug!(
            "showing rows [{}, {}), {} available",
            self.start,
            self.stop,
            trips.len()
        );
        console.print(table::trip_table(dataset, trips))
    }
}
