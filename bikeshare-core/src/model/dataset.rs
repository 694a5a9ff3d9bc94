use crate::model::{City, Trip, TripFilter};

/// the trips of a single city, owned by one reporting session.
#[derive(Clone, Debug)]
pub struct TripDataset {
    city: City,
    trips: Vec<Trip>,
    has_gender: bool,
    has_birth_year: bool,
}

impl TripDataset {
    /// # Arguments
    ///
    /// * `city` - city all trips belong to
    /// * `trips` - trips in source file order
    /// * `has_gender` - whether the source file carried a gender column
    /// * `has_birth_year` - whether the source file carried a birth year column
    pub fn new(city: City, trips: Vec<Trip>, has_gender: bool, has_birth_year: bool) -> Self {
        Self {
            city,
            trips,
            has_gender,
            has_birth_year,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trip> {
        self.trips.iter()
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    pub fn has_gender(&self) -> bool {
        self.has_gender
    }

    pub fn has_birth_year(&self) -> bool {
        self.has_birth_year
    }

    /// demographic statistics need both the gender and birth year columns.
    pub fn has_demographics(&self) -> bool {
        self.has_gender && self.has_birth_year
    }

    /// keeps the trips matching the filter, preserving order and row labels.
    pub fn filter(&self, filter: &TripFilter) -> TripDataset {
        let trips = self
            .trips
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect();
        TripDataset {
            city: self.city,
            trips,
            has_gender: self.has_gender,
            has_birth_year: self.has_birth_year,
        }
    }

    /// consuming variant of [`TripDataset::filter`] which avoids cloning trips.
    pub fn into_filtered(self, filter: &TripFilter) -> TripDataset {
        let TripDataset {
            city,
            trips,
            has_gender,
            has_birth_year,
        } = self;
        let trips = trips.into_iter().filter(|t| filter.matches(t)).collect();
        TripDataset {
            city,
            trips,
            has_gender,
            has_birth_year,
        }
    }

    /// the trips at positions `[start, stop)`, clamped to the dataset. a window
    /// past the end is empty.
    pub fn window(&self, start: usize, stop: usize) -> &[Trip] {
        let len = self.trips.len();
        let start = start.min(len);
        let stop = stop.clamp(start, len);
        &self.trips[start..stop]
    }
}
