use itertools::{Itertools, MinMaxResult};

use crate::{
    error::BikeshareError,
    model::{TripDataset, TripFilter},
    stats::{or_no_data, TripReport},
    util::duration::DurationBreakdown,
};

/// total, mean, longest and shortest trip duration in seconds. trips with
/// no recorded duration are left out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DurationStats {
    /// trips with a recorded duration
    pub count: usize,
    pub total: u64,
    /// mean duration rounded to the nearest second, ties to even
    pub mean: Option<u64>,
    pub max: Option<u64>,
    pub min: Option<u64>,
}

impl TripReport for DurationStats {
    fn heading() -> &'static str {
        "Calculating Trip Duration..."
    }

    fn compute(dataset: &TripDataset, _filter: &TripFilter) -> Result<Self, BikeshareError> {
        let durations = dataset.iter().filter_map(|t| t.duration).collect_vec();
        let count = durations.len();
        let total: u64 = durations.iter().sum();
        let mean = if count == 0 {
            None
        } else {
            Some((total as f64 / count as f64).round_ties_even() as u64)
        };
        let (min, max) = match durations.into_iter().minmax() {
            MinMaxResult::NoElements => (None, None),
            MinMaxResult::OneElement(d) => (Some(d), Some(d)),
            MinMaxResult::MinMax(lo, hi) => (Some(lo), Some(hi)),
        };
        Ok(DurationStats {
            count,
            total,
            mean,
            max,
            min,
        })
    }
}

impl DurationStats {
    /// total trip time including a days component.
    pub fn total_breakdown(&self) -> DurationBreakdown {
        DurationBreakdown::with_days(self.total)
    }

    /// mean trip time in hours, minutes and seconds.
    pub fn mean_breakdown(&self) -> Option<DurationBreakdown> {
        self.mean.map(DurationBreakdown::without_days)
    }

    /// longest trip including a days component.
    pub fn max_breakdown(&self) -> Option<DurationBreakdown> {
        self.max.map(DurationBreakdown::with_days)
    }

    /// shortest trip in hours, minutes and seconds.
    pub fn min_breakdown(&self) -> Option<DurationBreakdown> {
        self.min.map(DurationBreakdown::without_days)
    }
}

impl std::fmt::Display for DurationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "The total trip duration is:  {}.",
            self.total_breakdown()
        )?;
        writeln!(
            f,
            "\nThe average / mean travel time is: {}.",
            or_no_data(self.mean_breakdown())
        )?;
        writeln!(
            f,
            "\nThe longest trip is: {}.",
            or_no_data(self.max_breakdown())
        )?;
        write!(
            f,
            "\nThe shortest trip is: {}.",
            or_no_data(self.min_breakdown())
        )
    }
}
