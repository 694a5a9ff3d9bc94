//! the interactive report cycle: select, load, report, page, restart.
use std::{
    io::{BufRead, Write},
    time::Instant,
};

use bikeshare_core::{
    load,
    model::{City, TripDataset, TripFilter},
    stats::{
        DatasetSummary, DemographicStats, DurationStats, StationStats, TimeOfTravelStats,
        TripReport, UserTypeStats,
    },
    BikeshareConfig, BikeshareError,
};

use crate::app::{console::Console, pager::RawDataPager, selector};

const SEPARATOR_WIDTH: usize = 50;
const RESTART_PROMPT: &str = "\nWould you like to restart the program? Enter 'yes' or 'no'.";

/// runs report cycles until the user quits at the city prompt or declines
/// to restart.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &BikeshareConfig,
) -> Result<(), BikeshareError> {
    console.print("Hello! Time to explore some US Bike share Data!\n")?;
    console.print("\nLet's get started....\n")?;
    loop {
        let (city, filter) = match selector::select_filters(console)? {
            Some(selection) => selection,
            None => {
                log::info!("user quit at the city prompt");
                return Ok(());
            }
        };
        report_cycle(console, config, city, &filter)?;

        let restart = console.ask(RESTART_PROMPT)?;
        if restart.trim().to_lowercase() != "yes" {
            return Ok(());
        }
    }
}

/// loads the selected trips, prints every report in order, then offers the
/// raw data pager.
pub fn report_cycle<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &BikeshareConfig,
    city: City,
    filter: &TripFilter,
) -> Result<(), BikeshareError> {
    let started = Instant::now();
    let dataset = load::load_and_filter(city, filter, config)?;
    print_elapsed(console, started)?;
    if dataset.is_empty() {
        log::warn!("no {city} trips match {filter}");
    }

    if config.show_summary {
        summary(console, &dataset, filter)?;
    }
    report::<TimeOfTravelStats, _, _>(console, &dataset, filter)?;
    report::<StationStats, _, _>(console, &dataset, filter)?;
    report::<DurationStats, _, _>(console, &dataset, filter)?;
    report::<UserTypeStats, _, _>(console, &dataset, filter)?;
    if dataset.has_demographics() {
        report::<DemographicStats, _, _>(console, &dataset, filter)?;
    } else {
        log::debug!("{city} data has no gender and birth year columns, skipping demographics");
    }

    RawDataPager::new(config.page_size).run(console, &dataset)
}

/// prints the dataset summary. unlike the reports it is not timed.
fn summary<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dataset: &TripDataset,
    filter: &TripFilter,
) -> Result<(), BikeshareError> {
    console.print(format!("\n{}\n", DatasetSummary::heading()))?;
    console.print(DatasetSummary::compute(dataset, filter)?)
}

/// prints a report's heading, computes it, then prints it with its timing.
fn report<T: TripReport, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    dataset: &TripDataset,
    filter: &TripFilter,
) -> Result<(), BikeshareError> {
    console.print(format!("\n{}\n", T::heading()))?;
    let started = Instant::now();
    let result = T::compute(dataset, filter)?;
    console.print(result)?;
    print_elapsed(console, started)
}

fn print_elapsed<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    started: Instant,
) -> Result<(), BikeshareError> {
    console.print(format!(
        "\nThis took {} seconds.",
        started.elapsed().as_secs_f64()
    ))?;
    console.print("-".repeat(SEPARATOR_WIDTH))
}
