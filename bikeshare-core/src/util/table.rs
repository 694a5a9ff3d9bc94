use comfy_table::{Cell, CellAlignment, Table};

use crate::{
    model::{Trip, TripDataset},
    util::time_format::{self, APP_DATETIME_FORMAT},
};

/// column headers for a trip table. gender and birth year appear only when
/// the dataset carries them. the route label is never a column.
pub fn trip_columns(dataset: &TripDataset) -> Vec<&'static str> {
    let mut columns = vec![
        "",
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if dataset.has_gender() {
        columns.push("Gender");
    }
    if dataset.has_birth_year() {
        columns.push("Birth Year");
    }
    columns.extend(["Month", "Day"]);
    columns
}

/// renders trips as a table labelled by their source row. an empty slice
/// produces a table with only the header.
pub fn trip_table(dataset: &TripDataset, trips: &[Trip]) -> Table {
    let mut table = Table::new();
    table.set_header(trip_columns(dataset));
    for trip in trips {
        let mut row = vec![
            Cell::new(trip.row).set_alignment(CellAlignment::Right),
            Cell::new(trip.start_time.format(APP_DATETIME_FORMAT)),
            Cell::new(optional(
                trip.end_time
                    .map(|t| t.format(APP_DATETIME_FORMAT).to_string())
                    .as_ref(),
            )),
            Cell::new(optional(trip.duration.as_ref())).set_alignment(CellAlignment::Right),
            Cell::new(optional(trip.start_station.as_ref())),
            Cell::new(optional(trip.end_station.as_ref())),
            Cell::new(optional(trip.user_type.as_ref())),
        ];
        if dataset.has_gender() {
            row.push(Cell::new(optional(trip.gender.as_ref())));
        }
        if dataset.has_birth_year() {
            let year = trip.birth_year.map(|y| format!("{y:.0}"));
            row.push(Cell::new(optional(year.as_ref())).set_alignment(CellAlignment::Right));
        }
        row.push(Cell::new(trip.month).set_alignment(CellAlignment::Right));
        row.push(Cell::new(time_format::weekday_name(trip.weekday)));
        table.add_row(row);
    }
    table
}

fn optional<T: std::fmt::Display>(value: Option<&T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
