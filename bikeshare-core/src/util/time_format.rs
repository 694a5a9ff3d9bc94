use chrono::{NaiveDateTime, ParseResult, Weekday};

pub const APP_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `%.f` also accepts a timestamp without fractional seconds.
const TRIP_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
const ISO_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn parse_timestamp(value: &str) -> ParseResult<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, TRIP_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, ISO_DATETIME_FORMAT))
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// title-case month name for a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    let m = u8::try_from(month).ok()?;
    chrono::Month::try_from(m).ok().map(|m| m.name())
}

/// renders an hour of the day (0-23) on a 12-hour clock, e.g. `0 -> "12am"`,
/// `12 -> "12pm"`, `13 -> "1pm"`.
pub fn format_hour_12(hour: u32) -> String {
    match hour {
        0 => String::from("12am"),
        1..=11 => format!("{hour}am"),
        12 => String::from("12pm"),
        _ => format!("{}pm", hour - 12),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_format_hour_12() {
        assert_eq!(format_hour_12(0), "12am");
        assert_eq!(format_hour_12(1), "1am");
        assert_eq!(format_hour_12(11), "11am");
        assert_eq!(format_hour_12(12), "12pm");
        assert_eq!(format_hour_12(13), "1pm");
        assert_eq!(format_hour_12(23), "11pm");
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let plain = parse_timestamp("2017-05-29 18:36:27").unwrap();
        assert_eq!(plain.month(), 5);
        assert_eq!(plain.hour(), 18);

        let fractional = parse_timestamp("2017-05-29 18:36:27.250").unwrap();
        assert_eq!(fractional.second(), 27);

        let iso = parse_timestamp("2017-05-29T18:36:27").unwrap();
        assert_eq!(iso, plain);

        assert!(parse_timestamp("29/05/2017 18:36").is_err());
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(6), Some("June"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }
}
