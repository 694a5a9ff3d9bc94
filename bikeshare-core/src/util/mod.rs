pub mod duration;
pub mod table;
pub mod time_format;
