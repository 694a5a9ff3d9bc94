
/// the three cities with bike share trip data available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYork,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYork, City::Washington];

    /// the lowercase name accepted at the city prompt.
    pub fn key(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYork => "new york",
            City::Washington => "washington",
        }
    }

    /// parses user input, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Option<City> {
        let normalized = input.trim().to_lowercase();
        City::ALL.into_iter().find(|c| c.key() == normalized)
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            City::Chicago => "Chicago",
            City::NewYork => "New York",
            City::Washington => "Washington",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(City::parse("Chicago"), Some(City::Chicago));
        assert_eq!(City::parse("  NEW YORK "), Some(City::NewYork));
        assert_eq!(City::parse("washington"), Some(City::Washington));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(City::parse("boston"), None);
        assert_eq!(City::parse("newyork"), None);
        assert_eq!(City::parse(""), None);
    }
}
