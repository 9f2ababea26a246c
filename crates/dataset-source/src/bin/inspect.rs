#![deny(warnings)]

use dataset_source::{default_dataset_path, load_csv_path};
use sales_core::{coerce_year, YearRange};

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| default_dataset_path().to_string());
    let loaded = load_csv_path(&path)?;
    let range = YearRange::default();
    let years: Vec<i32> = loaded
        .dataset
        .records()
        .iter()
        .filter_map(|r| coerce_year(&r.year, range).value())
        .collect();
    let undated = loaded.dataset.len() - years.len();
    println!(
        "{} | rows: {} | skipped: {} | bad sales cells: {} | untitled: {} | undated: {}",
        path,
        loaded.report.rows_loaded,
        loaded.report.rows_skipped,
        loaded.report.invalid_sales_cells,
        loaded.report.unnamed_rows,
        undated
    );
    match (years.iter().min(), years.iter().max()) {
        (Some(lo), Some(hi)) => println!("years: {lo}..={hi}"),
        _ => println!("years: none"),
    }
    Ok(())
}
