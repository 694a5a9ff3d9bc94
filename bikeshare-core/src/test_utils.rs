//! fixtures shared by unit tests across the crate.
use chrono::Duration;

use crate::{
    model::{City, Gender, Trip, TripDataset, TripRow},
    util::time_format,
};

/// builds a trip starting at `start` (`%Y-%m-%d %H:%M:%S`) through the same
/// row conversion the loader uses.
pub fn trip(start: &str, duration: u64, from: &str, to: &str, user_type: &str) -> Trip {
    let start_time = time_format::parse_timestamp(start).unwrap();
    let end_time = start_time + Duration::seconds(duration as i64);
    let row = TripRow {
        start_time: start.to_string(),
        end_time: Some(end_time.format(time_format::APP_DATETIME_FORMAT).to_string()),
        trip_duration: Some(duration as f64),
        start_station: Some(from.to_string()),
        end_station: Some(to.to_string()),
        user_type: Some(user_type.to_string()),
        gender: None,
        birth_year: None,
    };
    row.into_trip(0).unwrap()
}

/// same trip with demographic fields set.
pub fn with_demographics(mut trip: Trip, gender: Option<Gender>, birth_year: Option<f64>) -> Trip {
    trip.gender = gender;
    trip.birth_year = birth_year;
    trip
}

/// numbers the rows in order and wraps them in a dataset.
pub fn dataset(trips: Vec<Trip>, demographics: bool) -> TripDataset {
    let trips = trips
        .into_iter()
        .enumerate()
        .map(|(row, mut t)| {
            t.row = row;
            t
        })
        .collect();
    TripDataset::new(City::Chicago, trips, demographics, demographics)
}
