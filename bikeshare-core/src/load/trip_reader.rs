use std::io::Read;

use kdam::{Bar, BarExt};

use crate::{
    error::BikeshareError,
    model::{City, TripDataset, TripRow},
};

/// columns every city file must carry. gender and birth year are optional.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

const GENDER_COLUMN: &str = "Gender";
const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// reads trip rows from CSV text with a header row. columns are matched by
/// name, so their order does not matter and unknown columns (including the
/// unnamed index column) are ignored.
///
/// # Arguments
///
/// * `city` - city the trips belong to
/// * `reader` - source of CSV text
/// * `show_progress` - if true, draw a progress bar on stderr while reading
///
/// # Returns
///
/// all trips in file order, or the first row that failed to parse.
pub fn read_trips<R: Read>(
    city: City,
    reader: R,
    show_progress: bool,
) -> Result<TripDataset, BikeshareError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = csv_reader
        .headers()
        .map_err(|e| BikeshareError::InvalidData(format!("failure reading headers: {e}")))?
        .clone();
    let has_column = |name: &str| headers.iter().any(|h| h == name);
    if let Some(missing) = REQUIRED_COLUMNS.iter().find(|c| !has_column(**c)) {
        return Err(BikeshareError::MissingColumn(missing.to_string()));
    }
    let has_gender = has_column(GENDER_COLUMN);
    let has_birth_year = has_column(BIRTH_YEAR_COLUMN);

    let mut bar = if show_progress {
        let bar = Bar::builder()
            .desc(format!("read {city} trips"))
            .build()
            .map_err(|e| BikeshareError::InvalidData(format!("error building progress bar: {e}")))?;
        Some(bar)
    } else {
        None
    };

    let mut trips = vec![];
    for (row, result) in csv_reader.into_deserialize::<TripRow>().enumerate() {
        let raw = result.map_err(|e| BikeshareError::InvalidRow {
            row: row + 1,
            message: e.to_string(),
        })?;
        trips.push(raw.into_trip(row)?);
        if let Some(b) = bar.as_mut() {
            let _ = b.update(1);
        }
    }
    log::debug!(
        "read {} {city} trips (gender column: {has_gender}, birth year column: {has_birth_year})",
        trips.len()
    );
    Ok(TripDataset::new(city, trips, has_gender, has_birth_year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Gender, UserType};
    use chrono::Weekday;

    const NEW_YORK: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
5688089,2017-06-11 14:55:05,2017-06-11 15:08:21,795,Suffolk St & Stanton St,W Broadway & Spring St,Subscriber,Male,1998.0
4096714,2017-05-11 15:30:11,2017-05-11 15:41:43,692,Lexington Ave & E 63 St,1 Ave & E 78 St,Subscriber,Female,1981.0
2173887,2017-03-29 13:26:26,2017-03-29 13:48:31,1325,Broadway & W 41 St,E 27 St & 1 Ave,Customer,,
";

    #[test]
    fn test_read_trips() {
        let dataset = read_trips(City::NewYork, NEW_YORK.as_bytes(), false).unwrap();
        assert_eq!(dataset.len(), 3);
        assert!(dataset.has_demographics());

        let first = &dataset.trips()[0];
        assert_eq!(first.start_station.as_deref(), Some("Suffolk St & Stanton St"));
        assert_eq!(first.weekday, Weekday::Sun);
        assert_eq!(first.month, 6);
        assert_eq!(first.hour, 14);
        assert_eq!(first.gender, Some(Gender::Male));
        assert_eq!(first.birth_year, Some(1998.0));

        let last = &dataset.trips()[2];
        assert_eq!(last.user_type, Some(UserType::Customer));
        assert_eq!(last.gender, None);
        assert_eq!(last.birth_year, None);
        assert_eq!(last.row, 2);
    }

    #[test]
    fn test_read_trips_ignores_column_order() {
        let csv = "\
User Type,End Station,Start Station,Trip Duration,End Time,Start Time
Customer,B,A,60,2017-01-02 08:01:00,2017-01-02 08:00:00
";
        let dataset = read_trips(City::Washington, csv.as_bytes(), false).unwrap();
        assert_eq!(dataset.len(), 1);
        assert!(!dataset.has_demographics());
        assert_eq!(dataset.trips()[0].route().as_deref(), Some("A -to- B"));
        assert_eq!(dataset.trips()[0].duration, Some(60));
    }

    #[test]
    fn test_read_trips_header_only() {
        let csv = ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n";
        let dataset = read_trips(City::Washington, csv.as_bytes(), false).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_read_trips_missing_required_column() {
        let csv = "Start Time,End Time,Start Station,End Station,User Type\n";
        let result = read_trips(City::Chicago, csv.as_bytes(), false);
        match result {
            Err(BikeshareError::MissingColumn(col)) => assert_eq!(col, "Trip Duration"),
            other => panic!("expected MissingColumn, found {other:?}"),
        }
    }

    #[test]
    fn test_read_trips_keeps_rows_with_blank_cells() {
        let csv = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-01-02 08:00:00,2017-01-02 08:01:00,60,A,B,Subscriber
1,2017-01-02 09:00:00,,,,,
";
        let dataset = read_trips(City::Washington, csv.as_bytes(), false).unwrap();
        assert_eq!(dataset.len(), 2);
        let blank = &dataset.trips()[1];
        assert_eq!(blank.row, 1);
        assert_eq!(blank.hour, 9);
        assert_eq!(blank.end_time, None);
        assert_eq!(blank.duration, None);
        assert_eq!(blank.start_station, None);
        assert_eq!(blank.end_station, None);
        assert_eq!(blank.user_type, None);
    }

    #[test]
    fn test_read_trips_progress_bar() {
        let dataset = read_trips(City::NewYork, NEW_YORK.as_bytes(), true).unwrap();
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_read_trips_reports_bad_row() {
        let csv = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,2017-01-02 08:01:00,60,A,B,Customer
2017-01-02 09:00:00,2017-01-02 09:01:00,sixty,A,B,Customer
";
        let result = read_trips(City::Chicago, csv.as_bytes(), false);
        assert!(matches!(result, Err(BikeshareError::InvalidRow { row: 2, .. })));
    }
}
