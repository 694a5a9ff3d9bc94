use crate::{
    error::BikeshareError,
    model::{TripDataset, TripFilter},
    stats::{mode, or_no_data, TripReport},
};

/// most popular start station, end station and route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationStats {
    pub most_common_start: Option<String>,
    pub most_common_end: Option<String>,
    /// start and end station joined by [`crate::model::ROUTE_SEPARATOR`]
    pub most_common_route: Option<String>,
}

impl TripReport for StationStats {
    fn heading() -> &'static str {
        "Calculating The Most Popular Stations and Trip..."
    }

    fn compute(dataset: &TripDataset, _filter: &TripFilter) -> Result<Self, BikeshareError> {
        let most_common_start = mode(dataset.iter().filter_map(|t| t.start_station.as_deref()));
        let most_common_end = mode(dataset.iter().filter_map(|t| t.end_station.as_deref()));
        let most_common_route = mode(dataset.iter().filter_map(|t| t.route()));
        Ok(StationStats {
            most_common_start: most_common_start.map(String::from),
            most_common_end: most_common_end.map(String::from),
            most_common_route,
        })
    }
}

impl std::fmt::Display for StationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "The most popular start station is:  {}.",
            or_no_data(self.most_common_start.as_deref())
        )?;
        writeln!(
            f,
            "\nThe most popular end station is:  {}.",
            or_no_data(self.most_common_end.as_deref())
        )?;
        write!(
            f,
            "\nThe most frequently occurring combination of start and end stations is:\n{}",
            or_no_data(self.most_common_route.as_deref())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{dataset, trip};

    #[test]
    fn test_compute_popular_stations() {
        let ds = dataset(
            vec![
                trip("2017-01-02 08:00:00", 60, "A", "B", "Subscriber"),
                trip("2017-01-02 09:00:00", 60, "A", "C", "Subscriber"),
                trip("2017-01-02 10:00:00", 60, "C", "B", "Customer"),
                trip("2017-01-02 11:00:00", 60, "A", "B", "Customer"),
            ],
            false,
        );
        let stats = StationStats::compute(&ds, &TripFilter::default()).unwrap();
        assert_eq!(stats.most_common_start.as_deref(), Some("A"));
        assert_eq!(stats.most_common_end.as_deref(), Some("B"));
        assert_eq!(stats.most_common_route.as_deref(), Some("A -to- B"));
        assert!(stats.to_string().contains("stations is:\nA -to- B"));
    }

    #[test]
    fn test_route_is_not_derived_from_separate_modes() {
        // the most common start and end do not form the most common route
        let ds = dataset(
            vec![
                trip("2017-01-02 08:00:00", 60, "A", "X", "Subscriber"),
                trip("2017-01-02 09:00:00", 60, "A", "Y", "Subscriber"),
                trip("2017-01-02 10:00:00", 60, "C", "B", "Subscriber"),
                trip("2017-01-02 11:00:00", 60, "C", "B", "Subscriber"),
                trip("2017-01-02 12:00:00", 60, "A", "Z", "Subscriber"),
                trip("2017-01-02 13:00:00", 60, "D", "B", "Subscriber"),
            ],
            false,
        );
        let stats = StationStats::compute(&ds, &TripFilter::default()).unwrap();
        assert_eq!(stats.most_common_start.as_deref(), Some("A"));
        assert_eq!(stats.most_common_end.as_deref(), Some("B"));
        assert_eq!(stats.most_common_route.as_deref(), Some("C -to- B"));
    }

    #[test]
    fn test_missing_stations_are_skipped() {
        let mut blank_start = trip("2017-01-02 08:00:00", 60, "A", "C", "Subscriber");
        blank_start.start_station = None;
        let mut blank_end = trip("2017-01-02 09:00:00", 60, "D", "C", "Subscriber");
        blank_end.end_station = None;
        let ds = dataset(
            vec![
                blank_start.clone(),
                blank_start,
                blank_end,
                trip("2017-01-02 10:00:00", 60, "D", "B", "Customer"),
            ],
            false,
        );
        let stats = StationStats::compute(&ds, &TripFilter::default()).unwrap();
        assert_eq!(stats.most_common_start.as_deref(), Some("D"));
        assert_eq!(stats.most_common_end.as_deref(), Some("C"));
        assert_eq!(stats.most_common_route.as_deref(), Some("D -to- B"));
    }

    #[test]
    fn test_compute_empty_dataset() {
        let stats = StationStats::compute(&dataset(vec![], false), &TripFilter::default()).unwrap();
        assert_eq!(stats.most_common_start, None);
        assert_eq!(stats.most_common_route, None);
        assert!(stats.to_string().contains("start station is:  no data."));
    }
}
