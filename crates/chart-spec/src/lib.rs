#![deny(warnings)]

//! Chart specifications for the sales dashboard.
//!
//! Each builder maps one derived table to a renderer-agnostic [`ChartSpec`]:
//! - top sellers worldwide and per category as horizontal bars
//! - the yearly sales trend as a line with markers
//! - the per-year platform split as a donut
//! - per-year genre sales and regional best sellers as vertical bars

use data_pipeline::{CategorySelection, GroupedSums, Ranked};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sales_core::{Region, SalesRecord};
use serde::{Deserialize, Serialize};

const NAME: &str = "Name";
const GLOBAL_SALES: &str = "Global_Sales";
const GLOBAL_SALES_LABEL: &str = "Global Sales (millions)";
const SALES_LABEL: &str = "Sales (millions)";
const GAME_LABEL: &str = "Game";

/// Chart kind with its kind-specific options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChartKind {
    Bar {
        orientation: Orientation,
    },
    Line {
        markers: bool,
    },
    /// `hole` > 0 renders a donut.
    Pie {
        hole: f64,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// A data field bound to an axis, with its display label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Axis {
    pub field: String,
    pub label: String,
}

impl Axis {
    fn new(field: &str, label: &str) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
        }
    }
}

/// Named continuous color scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContinuousScale {
    Sunset,
}

impl ContinuousScale {
    /// Scale stops from low to high.
    pub fn stops(self) -> &'static [&'static str] {
        match self {
            ContinuousScale::Sunset => &[
                "rgb(243, 231, 155)",
                "rgb(250, 196, 132)",
                "rgb(248, 160, 126)",
                "rgb(235, 127, 134)",
                "rgb(206, 102, 147)",
                "rgb(160, 89, 160)",
                "rgb(92, 83, 165)",
            ],
        }
    }
}

/// Named qualitative palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    Set3,
}

impl Palette {
    pub fn colors(self) -> &'static [&'static str] {
        match self {
            Palette::Set3 => &[
                "rgb(141,211,199)",
                "rgb(255,255,179)",
                "rgb(190,186,218)",
                "rgb(251,128,114)",
                "rgb(128,177,211)",
                "rgb(253,180,98)",
                "rgb(179,222,105)",
                "rgb(252,205,229)",
                "rgb(217,217,217)",
                "rgb(188,128,189)",
                "rgb(204,235,197)",
                "rgb(255,237,111)",
            ],
        }
    }

    /// Color for the `i`-th category, cycling through the palette.
    pub fn color(self, i: usize) -> &'static str {
        let colors = self.colors();
        colors[i % colors.len()]
    }
}

/// How marks are colored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ColorScheme {
    /// Color by a numeric field along a continuous scale.
    Continuous {
        field: String,
        scale: ContinuousScale,
    },
    /// One palette color per distinct value of a field.
    Discrete { field: String, palette: Palette },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarMode {
    Stack,
}

/// Renderer layout hints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_tick_angle: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_mode: Option<BarMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Print each value on its mark.
    pub text_auto: bool,
}

/// Position of a point on the category axis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointKey {
    Year(i32),
    Label(String),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub key: PointKey,
    pub value: f64,
}

impl DataPoint {
    fn label(label: &str, value: Decimal) -> Self {
        Self {
            key: PointKey::Label(label.to_string()),
            value: to_f64(value),
        }
    }
}

/// Everything the external renderer needs to draw one chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    /// Category axis for bars and lines; slice names for pies.
    pub x: Axis,
    /// Value axis for bars and lines; slice values for pies.
    pub y: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorScheme>,
    pub layout: Layout,
    pub points: Vec<DataPoint>,
}

impl ChartSpec {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Sales figures are exact decimals; renderers want floats.
fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn sunset_on_global() -> Option<ColorScheme> {
    Some(ColorScheme::Continuous {
        field: GLOBAL_SALES.to_string(),
        scale: ContinuousScale::Sunset,
    })
}

fn set3_on(field: &str) -> Option<ColorScheme> {
    Some(ColorScheme::Discrete {
        field: field.to_string(),
        palette: Palette::Set3,
    })
}

fn title_points<'a, 'r, I>(rows: I) -> Vec<DataPoint>
where
    I: IntoIterator<Item = &'a Ranked<&'r SalesRecord>>,
    'r: 'a,
{
    rows.into_iter()
        .map(|r| DataPoint::label(&r.item.name, r.value))
        .collect()
}

/// Horizontal bar of titles by global sales, points in the given order.
fn horizontal_title_bar(title: String, points: Vec<DataPoint>) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar {
            orientation: Orientation::Horizontal,
        },
        title,
        x: Axis::new(GLOBAL_SALES, GLOBAL_SALES_LABEL),
        y: Axis::new(NAME, GAME_LABEL),
        color: sunset_on_global(),
        layout: Layout::default(),
        points,
    }
}

/// Top sellers worldwide.
///
/// `rows` come largest first from the ranking; the chart lists them ascending.
pub fn top_global_bar(rows: &[Ranked<&SalesRecord>]) -> ChartSpec {
    horizontal_title_bar(
        "Top 10 Best-Selling Games".to_string(),
        title_points(rows.iter().rev()),
    )
}

/// Global sales per year as a line with markers.
pub fn annual_trend_line(trend: &GroupedSums<i32>) -> ChartSpec {
    let points = trend
        .groups()
        .iter()
        .map(|(year, total)| DataPoint {
            key: PointKey::Year(*year),
            value: to_f64(*total),
        })
        .collect();
    ChartSpec {
        kind: ChartKind::Line { markers: true },
        title: "Global Video Game Sales Over the Years".to_string(),
        x: Axis::new("Year", "Year"),
        y: Axis::new(GLOBAL_SALES, "Total Sales (millions)"),
        color: None,
        layout: Layout::default(),
        points,
    }
}

/// Platform split for one year as a donut with the given hole ratio.
///
/// With no selectable year the chart is titled without one and is empty.
pub fn platform_donut(share: &GroupedSums<String>, year: Option<i32>, hole: f64) -> ChartSpec {
    let title = match year {
        Some(y) => format!("Platform Sales Distribution in {y}"),
        None => "Platform Sales Distribution".to_string(),
    };
    ChartSpec {
        kind: ChartKind::Pie { hole },
        title,
        x: Axis::new("Platform", "Platform"),
        y: Axis::new(GLOBAL_SALES, GLOBAL_SALES_LABEL),
        color: set3_on("Platform"),
        layout: Layout::default(),
        points: share
            .groups()
            .iter()
            .map(|(platform, total)| DataPoint::label(platform, *total))
            .collect(),
    }
}

/// Genre sales for one year, one colored bar per genre with values printed.
pub fn genre_bar(sales: &GroupedSums<String>, year: i32) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar {
            orientation: Orientation::Vertical,
        },
        title: format!("Genre Sales Distribution in {year}"),
        x: Axis::new("Genre", "Game Genre"),
        y: Axis::new(GLOBAL_SALES, SALES_LABEL),
        color: set3_on("Genre"),
        layout: Layout {
            x_tick_angle: Some(-45),
            bar_mode: Some(BarMode::Stack),
            height: None,
            text_auto: true,
        },
        points: sales
            .groups()
            .iter()
            .map(|(genre, total)| DataPoint::label(genre, *total))
            .collect(),
    }
}

/// Best sellers in one region, largest first.
pub fn regional_bar(region: Region, rows: &[Ranked<&SalesRecord>], height: u32) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar {
            orientation: Orientation::Vertical,
        },
        title: format!("Top 50 Best-Selling Games in {}", region.label()),
        x: Axis::new(NAME, GAME_LABEL),
        y: Axis::new(region.as_ref(), SALES_LABEL),
        color: set3_on(NAME),
        layout: Layout {
            x_tick_angle: Some(-45),
            bar_mode: None,
            height: Some(height),
            text_auto: false,
        },
        points: title_points(rows),
    }
}

/// Top titles within the selected genre or platform, in ranking order.
pub fn category_bar(selection: &CategorySelection, rows: &[Ranked<&SalesRecord>]) -> ChartSpec {
    let value = selection.value.as_deref().unwrap_or_default();
    horizontal_title_bar(
        format!("Top Games in {value} ({})", selection.dimension),
        title_points(rows),
    )
}
