#![deny(warnings)]

//! Dataset source: loads the sales table from CSV.

use sales_core::{coerce_sales, Coerced, Dataset, SalesRecord};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Columns every source must provide.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Name",
    "Platform",
    "Year",
    "Genre",
    "NA_Sales",
    "EU_Sales",
    "JP_Sales",
    "Other_Sales",
    "Global_Sales",
];

/// Returns the default path of the bundled sales table.
pub fn default_dataset_path() -> &'static str {
    "./data/vgsales.csv"
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column: {0}")]
    MissingColumn(&'static str),
}

/// Counters describing one load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows_loaded: usize,
    /// Rows dropped because the CSV framing was malformed.
    pub rows_skipped: usize,
    /// Non-blank sales cells that failed numeric coercion.
    pub invalid_sales_cells: usize,
    /// Loaded rows with a blank title. They are kept.
    pub unnamed_rows: usize,
}

/// A loaded table with its report.
#[derive(Clone, Debug)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub report: LoadReport,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Rank", default)]
    rank: Option<String>,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Platform")]
    platform: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "Genre")]
    genre: String,
    #[serde(rename = "Publisher", default)]
    publisher: Option<String>,
    #[serde(rename = "NA_Sales")]
    na_sales: String,
    #[serde(rename = "EU_Sales")]
    eu_sales: String,
    #[serde(rename = "JP_Sales")]
    jp_sales: String,
    #[serde(rename = "Other_Sales")]
    other_sales: String,
    #[serde(rename = "Global_Sales")]
    global_sales: String,
}

impl CsvRow {
    fn into_record(self, report: &mut LoadReport) -> SalesRecord {
        let mut sales = |raw: &str| match coerce_sales(raw) {
            Coerced::Value(v) => Some(v),
            Coerced::Missing => None,
            Coerced::Invalid(_) => {
                report.invalid_sales_cells += 1;
                None
            }
        };
        SalesRecord {
            rank: self.rank.as_deref().and_then(|r| r.trim().parse().ok()),
            na_sales: sales(&self.na_sales),
            eu_sales: sales(&self.eu_sales),
            jp_sales: sales(&self.jp_sales),
            other_sales: sales(&self.other_sales),
            global_sales: sales(&self.global_sales),
            name: self.name,
            platform: self.platform,
            year: self.year,
            genre: self.genre,
            publisher: self.publisher.unwrap_or_default(),
        }
    }
}

/// Load a sales table from a CSV file.
pub fn load_csv_path<P: AsRef<Path>>(path: P) -> Result<LoadedDataset, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let loaded = load_csv_reader(file)?;
    info!(
        path = %path.display(),
        rows = loaded.report.rows_loaded,
        skipped = loaded.report.rows_skipped,
        "dataset loaded"
    );
    Ok(loaded)
}

/// Load a sales table from any CSV reader with a header row.
///
/// Columns are matched by header name. Malformed rows are skipped and counted.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<LoadedDataset, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();
    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required));
        }
    }

    let mut report = LoadReport::default();
    let mut records = Vec::new();
    for (line, row) in rdr.deserialize::<CsvRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(row = line + 1, error = %e, "skipping malformed row");
                report.rows_skipped += 1;
                continue;
            }
        };
        let record = row.into_record(&mut report);
        if record.is_unnamed() {
            report.unnamed_rows += 1;
        }
        records.push(record);
    }
    report.rows_loaded = records.len();
    if report.invalid_sales_cells > 0 {
        warn!(
            cells = report.invalid_sales_cells,
            "sales cells failed numeric coercion"
        );
    }
    if report.unnamed_rows > 0 {
        warn!(rows = report.unnamed_rows, "rows without a title");
    }
    Ok(LoadedDataset {
        dataset: Dataset::new(records),
        report,
    })
}
