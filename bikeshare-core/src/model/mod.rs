mod city;
mod dataset;
mod filter;
mod trip;
mod trip_row;

pub use city::City;
pub use dataset::TripDataset;
pub use filter::{DayFilter, Month, MonthFilter, TripFilter};
pub use trip::{Gender, Trip, UserType, ROUTE_SEPARATOR};
pub use trip_row::TripRow;
