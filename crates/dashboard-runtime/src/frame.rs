//! The output of one recompute pass: an ordered page of blocks.

use chart_spec::ChartSpec;
use data_pipeline::{CategorySelection, Degradation, YearSlider};
use sales_core::Region;
use serde::{Deserialize, Serialize};

/// The six chart sections, in page order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    TopGlobal,
    AnnualTrend,
    PlatformShare,
    GenreSales,
    RegionalTop,
    CategoryTop,
}

/// An input control for the presentation layer to draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum WidgetSpec {
    /// `range` is `None` when the dataset has no valid year.
    Slider {
        label: String,
        range: Option<YearSlider>,
        value: Option<i32>,
    },
    TextInput {
        label: String,
        placeholder: String,
        value: String,
    },
    SelectBox {
        label: String,
        options: Vec<String>,
        default: Option<String>,
        value: Option<String>,
    },
}

/// A chart with the degradations that shaped it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSection {
    pub id: SectionId,
    pub chart: ChartSpec,
    pub notes: Vec<Degradation>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "block", content = "spec", rename_all = "snake_case")]
pub enum Block {
    /// Markdown heading text.
    Heading(String),
    Separator,
    Widget(WidgetSpec),
    Chart(ChartSection),
}

impl Block {
    pub(crate) fn heading(text: &str) -> Self {
        Block::Heading(text.to_string())
    }
}

/// Filter values after defaults, clamping and fallbacks were applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedFilters {
    pub slider_year: Option<i32>,
    pub text_year: i32,
    pub region: Region,
    pub category: CategorySelection,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardFrame {
    pub blocks: Vec<Block>,
    pub resolved: ResolvedFilters,
}

impl DashboardFrame {
    /// Chart sections in page order.
    pub fn charts(&self) -> impl Iterator<Item = &ChartSection> + '_ {
        self.blocks.iter().filter_map(|b| match b {
            Block::Chart(section) => Some(section),
            _ => None,
        })
    }

    pub fn section(&self, id: SectionId) -> Option<&ChartSection> {
        self.charts().find(|s| s.id == id)
    }

    pub fn widgets(&self) -> impl Iterator<Item = &WidgetSpec> + '_ {
        self.blocks.iter().filter_map(|b| match b {
            Block::Widget(w) => Some(w),
            _ => None,
        })
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
