use chrono::{Datelike, Timelike};
use serde::Deserialize;

use crate::{
    error::BikeshareError,
    model::{Gender, Trip, UserType},
    util::time_format,
};

/// a single row of a city trip file, read by header name. the unnamed
/// leading index column of the source files has no field here and is
/// dropped during deserialization. only the start time is required; blank
/// cells in the other columns are read as missing values.
#[derive(Deserialize, Clone, Debug)]
pub struct TripRow {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Trip Duration", default)]
    pub trip_duration: Option<f64>,
    #[serde(rename = "Start Station", default)]
    pub start_station: Option<String>,
    #[serde(rename = "End Station", default)]
    pub end_station: Option<String>,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

impl TripRow {
    /// converts the raw row into a [`Trip`], deriving month, weekday and hour
    /// from the start time.
    ///
    /// # Arguments
    ///
    /// * `row` - zero-based position of this row in the source file, kept as
    ///   the trip's display label
    pub fn into_trip(self, row: usize) -> Result<Trip, BikeshareError> {
        let start_time = time_format::parse_timestamp(&self.start_time).map_err(|e| {
            BikeshareError::InvalidRow {
                row: row + 1,
                message: format!("unable to parse start time '{}': {e}", self.start_time),
            }
        })?;
        let end_time = match non_blank(self.end_time) {
            Some(text) => Some(time_format::parse_timestamp(&text).map_err(|e| {
                BikeshareError::InvalidRow {
                    row: row + 1,
                    message: format!("unable to parse end time '{text}': {e}"),
                }
            })?),
            None => None,
        };
        let duration = match self.trip_duration {
            Some(d) if !d.is_finite() || d < 0.0 => {
                return Err(BikeshareError::InvalidRow {
                    row: row + 1,
                    message: format!(
                        "trip duration must be a non-negative number of seconds, found {d}"
                    ),
                });
            }
            Some(d) => Some(d.round() as u64),
            None => None,
        };
        let user_type = non_blank(self.user_type).map(|u| UserType::from(u.as_str()));
        let gender = self.gender.as_deref().and_then(Gender::parse);

        Ok(Trip {
            row,
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            end_time,
            duration,
            start_station: non_blank(self.start_station),
            end_station: non_blank(self.end_station),
            user_type,
            gender,
            birth_year: self.birth_year,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
