pub mod config;
pub mod error;
pub mod load;
pub mod model;
pub mod stats;
pub mod util;

#[cfg(test)]
mod test_utils;

pub use config::BikeshareConfig;
pub use error::BikeshareError;
