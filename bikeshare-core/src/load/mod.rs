//! reads city trip files into a [`TripDataset`] and applies the session filter.
mod trip_reader;

pub use trip_reader::{read_trips, REQUIRED_COLUMNS};

use std::{fs::File, io::BufReader};

use crate::{
    config::BikeshareConfig,
    error::BikeshareError,
    model::{City, TripDataset, TripFilter},
};

/// loads every trip for a city from the file named in the configuration.
pub fn load_city(city: City, config: &BikeshareConfig) -> Result<TripDataset, BikeshareError> {
    let path = config.city_file(city);
    log::debug!("reading {city} trips from {}", path.display());
    let file = File::open(&path).map_err(|e| BikeshareError::ReadError {
        path: path.clone(),
        message: e.to_string(),
    })?;
    read_trips(city, BufReader::new(file), config.show_progress).map_err(|e| match e {
        BikeshareError::InvalidRow { .. }
        | BikeshareError::InvalidData(_)
        | BikeshareError::MissingColumn(_) => BikeshareError::ReadError {
            path: path.clone(),
            message: e.to_string(),
        },
        other => other,
    })
}

/// loads a city's trips and keeps those matching the filter. an empty result
/// is not an error.
pub fn load_and_filter(
    city: City,
    filter: &TripFilter,
    config: &BikeshareConfig,
) -> Result<TripDataset, BikeshareError> {
    let dataset = load_city(city, config)?;
    let total = dataset.len();
    let filtered = dataset.into_filtered(filter);
    log::info!(
        "loaded {total} {city} trips, {} remain after filtering by {filter}",
        filtered.len()
    );
    Ok(filtered)
}
