use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::{error::BikeshareError, model::City};

/// defaults applied before any user configuration file or environment
/// variable.
pub const DEFAULT_CONFIGURATION: &str = r#"
data_directory = "."
page_size = 5
show_summary = true
show_progress = false

[city_files]
chicago = "chicago.csv"
new_york = "new_york_city.csv"
washington = "washington.csv"
"#;

/// prefix for environment variable overrides, e.g. `BIKESHARE_PAGE_SIZE=10`
/// or `BIKESHARE_CITY_FILES__CHICAGO=chicago_2017.csv`.
pub const ENV_PREFIX: &str = "BIKESHARE";

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct BikeshareConfig {
    /// directory containing the city trip files
    pub data_directory: PathBuf,
    pub city_files: CityFiles,
    /// number of rows shown per page of raw trip data
    pub page_size: usize,
    /// print the dataset summary before the reports
    pub show_summary: bool,
    /// draw a progress bar on stderr while reading trip files
    pub show_progress: bool,
}

/// file name of each city's trip data, relative to the data directory.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct CityFiles {
    pub chicago: String,
    pub new_york: String,
    pub washington: String,
}

impl BikeshareConfig {
    /// builds the configuration from the defaults, an optional TOML file and
    /// `BIKESHARE_*` environment variables, later sources taking precedence.
    pub fn load(config_file: Option<&Path>) -> Result<BikeshareConfig, BikeshareError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIGURATION, FileFormat::Toml));
        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );
        let config = builder.build().map_err(|e| {
            let source = config_file
                .map(|p| format!("file '{}'", p.display()))
                .unwrap_or_else(|| String::from("default configuration"));
            BikeshareError::InvalidConfiguration(format!("{source} produced error: {e}"))
        })?;
        let result: BikeshareConfig = config
            .try_deserialize()
            .map_err(|e| BikeshareError::InvalidConfiguration(e.to_string()))?;
        result.validate()?;
        log::debug!("loaded configuration: {result:?}");
        Ok(result)
    }

    pub fn validate(&self) -> Result<(), BikeshareError> {
        if self.page_size == 0 {
            return Err(BikeshareError::InvalidConfiguration(String::from(
                "page_size must be at least 1",
            )));
        }
        Ok(())
    }

    /// full path to the trip file for a city.
    pub fn city_file(&self, city: City) -> PathBuf {
        let filename = match city {
            City::Chicago => &self.city_files.chicago,
            City::NewYork => &self.city_files.new_york,
            City::Washington => &self.city_files.washington,
        };
        self.data_directory.join(filename)
    }
}

impl Default for BikeshareConfig {
    fn default() -> Self {
        Self {
            data_directory: PathBuf::from("."),
            city_files: CityFiles {
                chicago: String::from("chicago.csv"),
                new_york: String::from("new_york_city.csv"),
                washington: String::from("washington.csv"),
            },
            page_size: 5,
            show_summary: true,
            show_progress: false,
        }
    }
}
