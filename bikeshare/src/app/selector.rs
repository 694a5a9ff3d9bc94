//! collects the city, month and day for a session.
use std::io::{BufRead, Write};

use bikeshare_core::{
    model::{City, DayFilter, MonthFilter, TripFilter},
    BikeshareError,
};

use crate::app::console::Console;

/// typed at the city prompt to leave the program.
pub const QUIT_SENTINEL: &str = "quit";

const CITY_PROMPT: &str = "\nPlease select the name of the city whose data you'd like to analyse:\n\
     ------------Washington, New York, Chicago-----------\n\n       \
     (Enter 'quit' to terminate the program)";
const MONTH_PROMPT: &str = "\nPlease select the desired month: \n\
     -------(January, February, March, April, May, June)-------\n          \
     (Enter 'all' for data on all months)";
const DAY_PROMPT: &str = "Please enter the desired day of the week:\n\
     -----(Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, Sunday)-----\n              \
     (Enter 'all' for data on the whole week)";
const INVALID_CITY: &str = "\nInvalid input!!. Please try again.\n";
const INVALID_MONTH: &str = "Invalid input!!. Please try again.\n";
const INVALID_DAY: &str = "Invalid input!!! Please try again:\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CityChoice {
    City(City),
    Quit,
}

impl CityChoice {
    fn parse(input: &str) -> Option<CityChoice> {
        if input.trim().eq_ignore_ascii_case(QUIT_SENTINEL) {
            return Some(CityChoice::Quit);
        }
        City::parse(input).map(CityChoice::City)
    }
}

/// prompts for a city, month and day until each answer is valid.
///
/// # Returns
///
/// the selected city and filter, or `None` if the user quit at the city prompt.
pub fn select_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<(City, TripFilter)>, BikeshareError> {
    let city = match console.prompt_until(CITY_PROMPT, Some(INVALID_CITY), CityChoice::parse)? {
        CityChoice::City(city) => city,
        CityChoice::Quit => return Ok(None),
    };
    let month = console.prompt_until(MONTH_PROMPT, Some(INVALID_MONTH), MonthFilter::parse)?;
    let day = console.prompt_until(DAY_PROMPT, Some(INVALID_DAY), DayFilter::parse)?;
    console.print("-".repeat(50))?;

    let filter = TripFilter::new(month, day);
    log::info!("selected {city} with {filter}");
    Ok(Some((city, filter)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_core::model::Month;
    use chrono::Weekday;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<Option<(City, TripFilter)>, BikeshareError>, String) {
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), vec![]);
        let result = select_filters(&mut console);
        let output = String::from_utf8(console.output().clone()).unwrap();
        (result, output)
    }

    #[test]
    fn test_select_all_fields() {
        let (result, _) = run("Chicago\nMarch\nfriday\n");
        let (city, filter) = result.unwrap().unwrap();
        assert_eq!(city, City::Chicago);
        assert_eq!(filter.month, MonthFilter::Only(Month::March));
        assert_eq!(filter.day, DayFilter::Only(Weekday::Fri));
    }

    #[test]
    fn test_select_reprompts_on_undecodable_city() {
        let mut console = Console::new(
            Cursor::new(b"chi\xffcago\nwashington\nall\nall\n".to_vec()),
            vec![],
        );
        let (city, _) = select_filters(&mut console).unwrap().unwrap();
        assert_eq!(city, City::Washington);
        let output = String::from_utf8(console.output().clone()).unwrap();
        assert_eq!(output.matches("Invalid input!!. Please try again.").count(), 1);
    }

    #[test]
    fn test_select_reprompts_on_invalid_input() {
        let (result, output) = run("boston\nnew york\njuly\nall\nfunday\nALL\n");
        let (city, filter) = result.unwrap().unwrap();
        assert_eq!(city, City::NewYork);
        assert_eq!(filter, TripFilter::default());
        assert_eq!(output.matches("Invalid input!!. Please try again.").count(), 2);
        assert_eq!(output.matches("Invalid input!!! Please try again:").count(), 1);
    }

    #[test]
    fn test_quit_at_city_prompt() {
        let (result, output) = run("QUIT\n");
        assert!(result.unwrap().is_none());
        assert!(!output.contains("desired month"));
    }

    #[test]
    fn test_quit_is_only_a_city_sentinel() {
        let (result, _) = run("washington\nquit\njune\nquit\nmonday\n");
        let (city, filter) = result.unwrap().unwrap();
        assert_eq!(city, City::Washington);
        assert_eq!(filter.month, MonthFilter::Only(Month::June));
        assert_eq!(filter.day, DayFilter::Only(Weekday::Mon));
    }
}
