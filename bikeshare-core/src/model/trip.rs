use chrono::{NaiveDateTime, Weekday};

/// joins start and end station names into a route label.
pub const ROUTE_SEPARATOR: &str = " -to- ";

/// rider category recorded by the operator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum UserType {
    Subscriber,
    Customer,
    /// any other label found in the source data, such as "Dependent"
    Other(String),
}

impl From<&str> for UserType {
    fn from(value: &str) -> Self {
        match value.trim() {
            "Subscriber" => UserType::Subscriber,
            "Customer" => UserType::Customer,
            other => UserType::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserType::Subscriber => write!(f, "Subscriber"),
            UserType::Customer => write!(f, "Customer"),
            UserType::Other(label) => write!(f, "{label}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Gender> {
        match value.trim() {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// one bike share trip with the fields derived from its start time. every
/// column other than the start time may be missing in the source file.
#[derive(Clone, Debug, PartialEq)]
pub struct Trip {
    /// zero-based position of the trip in its source file
    pub row: usize,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    /// trip duration in whole seconds
    pub duration: Option<u64>,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub user_type: Option<UserType>,
    pub gender: Option<Gender>,
    /// birth year as stored in the source file, which writes it as a float
    pub birth_year: Option<f64>,
    /// month of the start time, 1-12
    pub month: u32,
    pub weekday: Weekday,
    /// hour of the start time, 0-23
    pub hour: u32,
}

impl Trip {
    /// the start and end stations joined by [`ROUTE_SEPARATOR`], or `None`
    /// when either station is missing.
    pub fn route(&self) -> Option<String> {
        match (&self.start_station, &self.end_station) {
            (Some(start), Some(end)) => Some(format!("{start}{ROUTE_SEPARATOR}{end}")),
            _ => None,
        }
    }
}
