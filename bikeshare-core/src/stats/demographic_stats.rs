use itertools::{Itertools, MinMaxResult};

use crate::{
    error::BikeshareError,
    model::{Gender, TripDataset, TripFilter},
    stats::{mode, or_no_data, TripReport},
};

/// gender counts and birth year range. only available for cities whose
/// files carry both a gender and a birth year column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemographicStats {
    pub males: usize,
    pub females: usize,
    pub earliest_birth_year: Option<i32>,
    pub latest_birth_year: Option<i32>,
    pub most_common_birth_year: Option<i32>,
}

impl TripReport for DemographicStats {
    fn heading() -> &'static str {
        "Calculating Gender and Age Stats...."
    }

    /// fails with [`BikeshareError::MissingColumn`] when the dataset has no
    /// gender or birth year column; callers check
    /// [`TripDataset::has_demographics`] first.
    fn compute(dataset: &TripDataset, _filter: &TripFilter) -> Result<Self, BikeshareError> {
        if !dataset.has_gender() {
            return Err(BikeshareError::MissingColumn(String::from("Gender")));
        }
        if !dataset.has_birth_year() {
            return Err(BikeshareError::MissingColumn(String::from("Birth Year")));
        }
        let count_of = |gender: Gender| {
            dataset
                .iter()
                .filter(|t| t.gender == Some(gender))
                .count()
        };
        let birth_years = dataset
            .iter()
            .filter_map(|t| t.birth_year)
            .map(|y| y as i32)
            .collect_vec();
        let (earliest_birth_year, latest_birth_year) = match birth_years.iter().minmax() {
            MinMaxResult::NoElements => (None, None),
            MinMaxResult::OneElement(y) => (Some(*y), Some(*y)),
            MinMaxResult::MinMax(lo, hi) => (Some(*lo), Some(*hi)),
        };
        Ok(DemographicStats {
            males: count_of(Gender::Male),
            females: count_of(Gender::Female),
            earliest_birth_year,
            latest_birth_year,
            most_common_birth_year: mode(birth_years),
        })
    }
}

impl std::fmt::Display for DemographicStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "There are {} Males and {} Females.",
            self.males, self.females
        )?;
        writeln!(
            f,
            "\nThe earliest birth year on record is: {}, while the latest birth year is: {}",
            or_no_data(self.earliest_birth_year),
            or_no_data(self.latest_birth_year)
        )?;
        write!(
            f,
            "\nThe most common year of birth is: {}",
            or_no_data(self.most_common_birth_year)
        )
    }
}
