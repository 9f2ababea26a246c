#![deny(warnings)]

//! Headless dashboard driver: loads the sales table, applies the filters
//! given on the command line and emits the rendered page as JSON.

use anyhow::{Context, Result};
use dashboard_runtime::{
    load_config, recompute, DashboardConfig, FilterEvent, FilterState, SectionId,
};
use data_pipeline::normalize_years;
use dataset_source::{default_dataset_path, load_csv_path};
use sales_core::{CategoryDimension, Region};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct CliArgs {
    data: Option<PathBuf>,
    config: Option<PathBuf>,
    year: Option<i32>,
    year_text: Option<String>,
    region: Option<String>,
    category_type: Option<String>,
    category: Option<String>,
    out: Option<PathBuf>,
    version: bool,
}

fn parse_args() -> CliArgs {
    let mut args = CliArgs::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--data" => args.data = it.next().map(PathBuf::from),
            "--config" => args.config = it.next().map(PathBuf::from),
            "--year" => args.year = it.next().and_then(|s| s.parse().ok()),
            "--year-text" => args.year_text = it.next(),
            "--region" => args.region = it.next(),
            "--category-type" => args.category_type = it.next(),
            "--category" => args.category = it.next(),
            "--out" => args.out = it.next().map(PathBuf::from),
            "--version" => args.version = true,
            _ => {}
        }
    }
    args
}

/// Turn command-line selections into the events a UI would have sent.
///
/// Identifiers are checked here so an unknown region or dimension is
/// reported instead of silently ignored.
fn events(args: &CliArgs) -> Result<Vec<FilterEvent>> {
    let mut events = Vec::new();
    if let Some(year) = args.year {
        events.push(FilterEvent::YearSlid(year));
    }
    if let Some(text) = &args.year_text {
        events.push(FilterEvent::YearTextEdited(text.clone()));
    }
    if let Some(region) = &args.region {
        events.push(FilterEvent::RegionSelected(region.parse::<Region>()?));
    }
    if let Some(dimension) = &args.category_type {
        events.push(FilterEvent::CategoryTypeSelected(
            dimension.parse::<CategoryDimension>()?,
        ));
    }
    if let Some(value) = &args.category {
        events.push(FilterEvent::CategoryValueSelected(value.clone()));
    }
    Ok(events)
}

fn main() -> Result<()> {
    let args = parse_args();
    if args.version {
        println!(
            "vgsales-dashboard {} ({} built {})",
            env!("CARGO_PKG_VERSION"),
            env!("DASHBOARD_GIT_SHA"),
            env!("DASHBOARD_BUILD_DATE")
        );
        return Ok(());
    }

    // Logging setup
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => {
            load_config(path).with_context(|| format!("loading config {}", path.display()))?
        }
        None => DashboardConfig::default(),
    };
    let data_path = args
        .data
        .clone()
        .or_else(|| config.dataset_path.clone())
        .unwrap_or_else(|| PathBuf::from(default_dataset_path()));
    info!(data = %data_path.display(), "starting dashboard");

    let loaded = load_csv_path(&data_path)
        .with_context(|| format!("loading dataset {}", data_path.display()))?;
    let dataset = loaded.dataset;

    let normalized = normalize_years(&dataset, config.plausible_years);
    let mut filters = FilterState::initial(&normalized);
    for event in events(&args)? {
        filters = filters.apply(event, &normalized);
    }

    let frame = recompute(&dataset, &filters, &config);
    for section in frame.charts() {
        let degraded = if section.notes.is_empty() {
            ""
        } else {
            " (degraded)"
        };
        info!(
            "{:?}: {} | points: {}{}",
            section.id,
            section.chart.title,
            section.chart.points.len(),
            degraded
        );
    }
    if let Some(top) = frame.section(SectionId::TopGlobal) {
        if let Some(best) = top.chart.points.last() {
            info!(best = ?best.key, sales = best.value, "best seller");
        }
    }

    let json = frame.to_json_pretty()?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            println!("Frame written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
