use crate::{
    error::BikeshareError,
    model::{DayFilter, MonthFilter, TripDataset, TripFilter},
    stats::{mode, or_no_data, TripReport},
    util::time_format,
};

/// most frequent month, weekday and start hour. month and weekday are only
/// computed when the session does not already fix them.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeOfTravelStats {
    /// `None` when the month filter is not `All`
    pub most_common_month: Option<Option<u32>>,
    /// `None` when the day filter is not `All`
    pub most_common_day: Option<Option<&'static str>>,
    pub most_common_hour: Option<u32>,
}

impl TripReport for TimeOfTravelStats {
    fn heading() -> &'static str {
        "Calculating The Most Frequent Times of Travel..."
    }

    fn compute(dataset: &TripDataset, filter: &TripFilter) -> Result<Self, BikeshareError> {
        let most_common_month = match filter.month {
            MonthFilter::All => Some(mode(dataset.iter().map(|t| t.month))),
            MonthFilter::Only(_) => None,
        };
        // weekday ties compare by name
        let most_common_day = match filter.day {
            DayFilter::All => Some(mode(
                dataset
                    .iter()
                    .map(|t| time_format::weekday_name(t.weekday)),
            )),
            DayFilter::Only(_) => None,
        };
        let most_common_hour = mode(dataset.iter().map(|t| t.hour));
        Ok(TimeOfTravelStats {
            most_common_month,
            most_common_day,
            most_common_hour,
        })
    }
}

impl std::fmt::Display for TimeOfTravelStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(month) = self.most_common_month {
            let name = month.map(|m| time_format::month_name(m).unwrap_or("unknown"));
            writeln!(
                f,
                "The most common month for bike share travel is: {}.",
                or_no_data(name)
            )?;
        }
        if let Some(day) = self.most_common_day {
            writeln!(
                f,
                "\nThe most common day for bike share travel is: {}",
                or_no_data(day)
            )?;
        }
        let hour = self.most_common_hour.map(time_format::format_hour_12);
        write!(f, "\nThe most common starting hour is: {}", or_no_data(hour))
    }
}
