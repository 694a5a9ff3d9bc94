use std::path::{Path, PathBuf};

use bikeshare_core::{BikeshareConfig, BikeshareError};
use clap::Parser;

use crate::app::{console::Console, session};

/// Interactive explorer for US bike share trip data. Prompts for a city,
/// month and day, then prints travel statistics and pages through raw trips.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct BikeshareApp {
    /// TOML file overriding the default configuration
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// directory containing the city trip files. if not provided, use the
    /// configured directory (the current working directory by default).
    #[arg(short, long)]
    pub data_directory: Option<String>,
}

impl BikeshareApp {
    pub fn run(&self) -> Result<(), BikeshareError> {
        let mut config = BikeshareConfig::load(self.config_file.as_deref().map(Path::new))?;
        if let Some(dir) = &self.data_directory {
            config.data_directory = PathBuf::from(dir);
        }
        let stdin = std::io::stdin();
        let mut console = Console::new(stdin.lock(), std::io::stdout());
        session::run(&mut console, &config)
    }
}
