use comfy_table::{Cell, CellAlignment, Table};
use itertools::Itertools;

use crate::{
    error::BikeshareError,
    model::{Trip, TripDataset, TripFilter},
    stats::TripReport,
    util::table,
};

/// rows shown from each end of the dataset.
pub const SUMMARY_ROWS: usize = 5;

const STATISTICS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// count, mean, sample standard deviation, min, quartiles and max of one
/// numeric column. missing values are skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDescription {
    pub name: &'static str,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub q25: Option<f64>,
    pub q50: Option<f64>,
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

/// a first look at the filtered data: its head and tail, missing values per
/// column, and descriptive statistics of the numeric columns.
#[derive(Clone, Debug)]
pub struct DatasetSummary {
    head: TripDataset,
    tail: TripDataset,
    pub missing: Vec<(&'static str, usize)>,
    pub columns: Vec<ColumnDescription>,
}

impl TripReport for DatasetSummary {
    fn heading() -> &'static str {
        "Summarizing the data frame..."
    }

    fn compute(dataset: &TripDataset, _filter: &TripFilter) -> Result<Self, BikeshareError> {
        let len = dataset.len();
        let head = TripDataset::new(
            dataset.city(),
            dataset.window(0, SUMMARY_ROWS).to_vec(),
            dataset.has_gender(),
            dataset.has_birth_year(),
        );
        let tail = TripDataset::new(
            dataset.city(),
            dataset.window(len.saturating_sub(SUMMARY_ROWS), len).to_vec(),
            dataset.has_gender(),
            dataset.has_birth_year(),
        );

        let mut missing = vec![
            ("Start Time", 0),
            ("End Time", count_missing(dataset, |t| t.end_time.is_none())),
            ("Trip Duration", count_missing(dataset, |t| t.duration.is_none())),
            ("Start Station", count_missing(dataset, |t| t.start_station.is_none())),
            ("End Station", count_missing(dataset, |t| t.end_station.is_none())),
            ("User Type", count_missing(dataset, |t| t.user_type.is_none())),
        ];
        if dataset.has_gender() {
            missing.push(("Gender", count_missing(dataset, |t| t.gender.is_none())));
        }
        if dataset.has_birth_year() {
            missing.push(("Birth Year", count_missing(dataset, |t| t.birth_year.is_none())));
        }
        missing.extend([("Month", 0), ("Day", 0)]);

        let mut columns = vec![ColumnDescription::describe(
            "Trip Duration",
            dataset.iter().filter_map(|t| t.duration.map(|d| d as f64)),
        )];
        if dataset.has_birth_year() {
            columns.push(ColumnDescription::describe(
                "Birth Year",
                dataset.iter().filter_map(|t| t.birth_year),
            ));
        }
        columns.push(ColumnDescription::describe(
            "Month",
            dataset.iter().map(|t| t.month as f64),
        ));

        Ok(DatasetSummary {
            head,
            tail,
            missing,
            columns,
        })
    }
}

impl ColumnDescription {
    pub fn describe(name: &'static str, values: impl Iterator<Item = f64>) -> ColumnDescription {
        let sorted = values.sorted_by(f64::total_cmp).collect_vec();
        let count = sorted.len();
        let mean = if count == 0 {
            None
        } else {
            Some(sorted.iter().sum::<f64>() / count as f64)
        };
        let std = match mean {
            Some(m) if count > 1 => {
                let ss: f64 = sorted.iter().map(|v| (v - m).powi(2)).sum();
                Some((ss / (count - 1) as f64).sqrt())
            }
            _ => None,
        };
        ColumnDescription {
            name,
            count,
            mean,
            std,
            min: sorted.first().copied(),
            q25: quantile(&sorted, 0.25),
            q50: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted.last().copied(),
        }
    }

    /// values in [`STATISTICS`] order.
    fn statistics(&self) -> [Option<f64>; 8] {
        [
            Some(self.count as f64),
            self.mean,
            self.std,
            self.min,
            self.q25,
            self.q50,
            self.q75,
            self.max,
        ]
    }
}

fn count_missing(dataset: &TripDataset, is_missing: impl Fn(&Trip) -> bool) -> usize {
    dataset.iter().filter(|t| is_missing(t)).count()
}

/// linear interpolation between the closest ranks of sorted values.
fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let fraction = position - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

impl std::fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "First {SUMMARY_ROWS} rows of the data frame:")?;
        writeln!(f, "{}", table::trip_table(&self.head, self.head.trips()))?;
        writeln!(f, "\nLast {SUMMARY_ROWS} rows of the data frame:")?;
        writeln!(f, "{}", table::trip_table(&self.tail, self.tail.trips()))?;

        let mut missing = Table::new();
        missing.set_header(vec!["Column", "Missing"]);
        for (name, n) in self.missing.iter() {
            missing.add_row(vec![
                Cell::new(name),
                Cell::new(n).set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(f, "\nMissing values per column:")?;
        writeln!(f, "{missing}")?;

        let mut described = Table::new();
        let mut header = vec![""];
        header.extend(self.columns.iter().map(|c| c.name));
        described.set_header(header);
        for (idx, label) in STATISTICS.iter().enumerate() {
            let mut row = vec![Cell::new(label)];
            for column in self.columns.iter() {
                let value = match column.statistics()[idx] {
                    Some(v) => format!("{v:.2}"),
                    None => String::from("NaN"),
                };
                row.push(Cell::new(value).set_alignment(CellAlignment::Right));
            }
            described.add_row(row);
        }
        writeln!(f, "\nSummary statistics of the data frame:")?;
        write!(f, "{described}")
    }
}
