//! descriptive statistics over a filtered [`TripDataset`]. every report is a
//! read-only pass over the dataset and renders itself through `Display`.
mod demographic_stats;
mod duration_stats;
mod station_stats;
mod summary;
mod time_stats;
mod user_stats;

pub use demographic_stats::DemographicStats;
pub use duration_stats::DurationStats;
pub use station_stats::StationStats;
pub use summary::{ColumnDescription, DatasetSummary};
pub use time_stats::TimeOfTravelStats;
pub use user_stats::UserTypeStats;

use std::hash::Hash;

use itertools::Itertools;

use crate::{
    error::BikeshareError,
    model::{TripDataset, TripFilter},
};

/// placeholder shown when a statistic has no rows to work with.
pub const NO_DATA: &str = "no data";

/// a statistic computed over one session's trips.
pub trait TripReport: std::fmt::Display + Sized {
    /// printed before the report is computed.
    fn heading() -> &'static str;

    /// # Arguments
    ///
    /// * `dataset` - trips remaining after the session filter
    /// * `filter` - the session filter, which decides what is worth reporting
    fn compute(dataset: &TripDataset, filter: &TripFilter) -> Result<Self, BikeshareError>;
}

/// the most frequent value. ties go to the smallest value, so the result
/// does not depend on iteration order.
pub fn mode<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Ord,
{
    values
        .into_iter()
        .counts()
        .into_iter()
        .max_by(|(a, a_count), (b, b_count)| a_count.cmp(b_count).then_with(|| b.cmp(a)))
        .map(|(value, _)| value)
}

/// renders an optional statistic, falling back to [`NO_DATA`].
pub(crate) fn or_no_data<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::from(NO_DATA),
    }
}
