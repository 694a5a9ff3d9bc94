use chrono::Weekday;

use crate::model::Trip;

/// the months covered by the bike share datasets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based month number, matching chrono's `Datelike::month`.
    pub fn number(&self) -> u32 {
        match self {
            Month::January => 1,
            Month::February => 2,
            Month::March => 3,
            Month::April => 4,
            Month::May => 5,
            Month::June => 6,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Month::January => "january",
            Month::February => "february",
            Month::March => "march",
            Month::April => "april",
            Month::May => "may",
            Month::June => "june",
        }
    }
}

/// month selection. `All` disables month filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Only(Month),
}

impl MonthFilter {
    pub fn parse(input: &str) -> Option<MonthFilter> {
        let normalized = input.trim().to_lowercase();
        if normalized == "all" {
            return Some(MonthFilter::All);
        }
        Month::ALL
            .into_iter()
            .find(|m| m.key() == normalized)
            .map(MonthFilter::Only)
    }

    pub fn matches(&self, month: u32) -> bool {
        match self {
            MonthFilter::All => true,
            MonthFilter::Only(m) => m.number() == month,
        }
    }
}

/// day-of-week selection. `All` disables day filtering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

impl DayFilter {
    /// accepts full weekday names only; chrono's own parser also takes
    /// abbreviations, which the prompt does not.
    pub fn parse(input: &str) -> Option<DayFilter> {
        let normalized = input.trim().to_lowercase();
        if normalized == "all" {
            return Some(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| crate::util::time_format::weekday_name(*d).to_lowercase() == normalized)
            .map(DayFilter::Only)
    }

    pub fn matches(&self, weekday: Weekday) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Only(d) => *d == weekday,
        }
    }
}

/// the month and day selection for one session. built once by the
/// selector and passed by reference to the loader and every reporter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TripFilter {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl TripFilter {
    pub fn new(month: MonthFilter, day: DayFilter) -> TripFilter {
        TripFilter { month, day }
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        self.month.matches(trip.month) && self.day.matches(trip.weekday)
    }
}

impl std::fmt::Display for TripFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let month = match self.month {
            MonthFilter::All => "all",
            MonthFilter::Only(m) => m.key(),
        };
        let day = match self.day {
            DayFilter::All => "all",
            DayFilter::Only(d) => crate::util::time_format::weekday_name(d),
        };
        write!(f, "month={month}, day={}", day.to_lowercase())
    }
}
