#![deny(warnings)]

//! Dashboard runtime: threads the filter state and the sales table through
//! the pipeline and the chart builders, one full pass per input change.

mod config;
mod filters;
mod frame;

pub use config::{load_config, ConfigError, DashboardConfig};
pub use filters::{FilterEvent, FilterState};
pub use frame::{Block, ChartSection, DashboardFrame, ResolvedFilters, SectionId, WidgetSpec};

use chart_spec::{
    annual_trend_line, category_bar, genre_bar, platform_donut, regional_bar, top_global_bar,
    ChartSpec,
};
use data_pipeline::{
    annual_trend, category_options, category_top, genre_sales, normalize_years, parse_year_text,
    platform_share, regional_top, top_global, Degradation, GroupedSums, YearParse, YearSlider,
};
use sales_core::{CategoryDimension, Dataset, Region};
use tracing::{debug, info};

/// Rebuild the whole page from the table and the current filters.
///
/// Never fails: a section that cannot show what was asked for renders what
/// it can and records why in its notes.
pub fn recompute(
    dataset: &Dataset,
    filters: &FilterState,
    config: &DashboardConfig,
) -> DashboardFrame {
    let normalized = normalize_years(dataset, config.plausible_years);
    let years = normalized.valid_years();
    let mut blocks = vec![
        Block::heading("# 🎮 Video Game Sales Analysis"),
        Block::Separator,
    ];

    blocks.push(Block::heading("# Top 10 Best-Selling Games Globally"));
    let top = top_global(dataset, config.top_global_n());
    blocks.push(section(
        SectionId::TopGlobal,
        top_global_bar(&top),
        Vec::new(),
    ));
    blocks.push(Block::Separator);

    blocks.push(Block::heading("# Annual Global Video Game Sales"));
    let mut notes = Vec::new();
    if normalized.excluded() > 0 {
        notes.push(Degradation::TypeCoercionFailure {
            column: "Year".to_string(),
            excluded_rows: normalized.excluded(),
        });
    }
    blocks.push(section(
        SectionId::AnnualTrend,
        annual_trend_line(&annual_trend(&normalized)),
        notes,
    ));
    blocks.push(Block::Separator);

    blocks.push(Block::heading("# Video Game Platform Market Share"));
    let slider = YearSlider::from_years(&years);
    let slider_year = slider.map(|s| s.resolve(filters.selected_year));
    blocks.push(Block::Widget(WidgetSpec::Slider {
        label: "Select Year".to_string(),
        range: slider,
        value: slider_year,
    }));
    let share = slider_year
        .map(|y| platform_share(&normalized, y))
        .unwrap_or_else(GroupedSums::default);
    blocks.push(section(
        SectionId::PlatformShare,
        platform_donut(&share, slider_year, config.donut_hole),
        Vec::new(),
    ));
    blocks.push(Block::Separator);

    blocks.push(Block::heading("# Genre Sales Trends Across Years"));
    blocks.push(Block::Widget(WidgetSpec::TextInput {
        label: "Enter Year (1980-2020)".to_string(),
        placeholder: "e.g., 2003".to_string(),
        value: filters.free_text_year.clone(),
    }));
    let parsed = parse_year_text(&filters.free_text_year, &years);
    let text_year = parsed.resolve(config.default_text_year);
    let mut notes = Vec::new();
    if parsed.is_fallback() {
        notes.push(Degradation::SelectionOutOfRange {
            input: filters.free_text_year.clone(),
            fallback: text_year,
        });
    }
    if let YearParse::NotNumeric(text) = &parsed {
        debug!(%text, fallback = text_year, "free-text year is not a number");
    }
    blocks.push(section(
        SectionId::GenreSales,
        genre_bar(&genre_sales(&normalized, text_year), text_year),
        notes,
    ));
    blocks.push(Block::Separator);

    blocks.push(Block::heading("# Regional Video Game Sales Explorer"));
    let region = filters.selected_region;
    blocks.push(Block::Widget(WidgetSpec::SelectBox {
        label: "Select a Region".to_string(),
        options: Region::options(),
        default: Some(Region::default().to_string()),
        value: Some(region.to_string()),
    }));
    let regional = regional_top(normalized.records(), region, config.regional_top_n());
    let mut notes = Vec::new();
    if regional.uncoerced > 0 {
        notes.push(Degradation::TypeCoercionFailure {
            column: region.to_string(),
            excluded_rows: regional.uncoerced,
        });
    }
    blocks.push(section(
        SectionId::RegionalTop,
        regional_bar(region, &regional.rows, config.regional_chart_height),
        notes,
    ));
    blocks.push(Block::Separator);

    blocks.push(Block::heading("# Find Top Games by Genre or Platform"));
    let dimension = filters.category.dimension;
    blocks.push(Block::Widget(WidgetSpec::SelectBox {
        label: "Select Category Type".to_string(),
        options: CategoryDimension::options(),
        default: Some(CategoryDimension::default().to_string()),
        value: Some(dimension.to_string()),
    }));
    let options = category_options(normalized.records(), dimension);
    let selection = filters.category.clone().reconcile(&options);
    blocks.push(Block::Widget(WidgetSpec::SelectBox {
        label: format!("Select a {dimension}"),
        default: options.first().cloned(),
        value: selection.value.clone(),
        options,
    }));
    let top = category_top(normalized.records(), &selection, config.category_top_n());
    blocks.push(section(
        SectionId::CategoryTop,
        category_bar(&selection, &top),
        Vec::new(),
    ));

    info!(
        rows = dataset.len(),
        dated = normalized.len(),
        slider_year = ?slider_year,
        text_year,
        region = %region,
        "dashboard recomputed"
    );
    DashboardFrame {
        blocks,
        resolved: ResolvedFilters {
            slider_year,
            text_year,
            region,
            category: selection,
        },
    }
}

fn section(id: SectionId, chart: ChartSpec, mut notes: Vec<Degradation>) -> Block {
    if chart.is_empty() {
        notes.push(Degradation::EmptyResult);
    }
    if !notes.is_empty() {
        debug!(?id, ?notes, "section degraded");
    }
    Block::Chart(ChartSection { id, chart, notes })
}
