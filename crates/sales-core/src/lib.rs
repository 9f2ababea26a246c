#![deny(warnings)]

//! Core data model for the video game sales dashboard.
//!
//! This crate defines the sales record, the closed set of column identifiers
//! the pipeline may address, and the coercion helpers that turn raw table
//! cells into typed values.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};
use thiserror::Error;

/// One row of the sales table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Position in the source ranking, when the source provides one.
    pub rank: Option<u32>,
    /// Title of the game.
    pub name: String,
    /// Platform identifier, e.g. "Wii" or "PS2".
    pub platform: String,
    /// Release year exactly as loaded; see [`coerce_year`].
    pub year: String,
    /// Genre, e.g. "Sports".
    pub genre: String,
    /// Publisher name (may be empty).
    pub publisher: String,
    /// North American sales in millions of units.
    pub na_sales: Option<Decimal>,
    /// European sales in millions of units.
    pub eu_sales: Option<Decimal>,
    /// Japanese sales in millions of units.
    pub jp_sales: Option<Decimal>,
    /// Rest-of-world sales in millions of units.
    pub other_sales: Option<Decimal>,
    /// Worldwide sales in millions of units.
    pub global_sales: Option<Decimal>,
}

impl SalesRecord {
    /// Value of a sales column, `None` when the cell failed coercion.
    pub fn sales(&self, column: SalesColumn) -> Option<Decimal> {
        match column {
            SalesColumn::NaSales => self.na_sales,
            SalesColumn::EuSales => self.eu_sales,
            SalesColumn::JpSales => self.jp_sales,
            SalesColumn::OtherSales => self.other_sales,
            SalesColumn::GlobalSales => self.global_sales,
        }
    }

    /// Value of a category column.
    pub fn category(&self, dimension: CategoryDimension) -> &str {
        match dimension {
            CategoryDimension::Genre => &self.genre,
            CategoryDimension::Platform => &self.platform,
        }
    }

    /// True when the title cell is blank. Such rows still carry sales and
    /// stay in every aggregate; only the per-title charts show an empty label.
    pub fn is_unnamed(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// The loaded sales table. Read-only for the lifetime of a session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<SalesRecord>,
}

impl Dataset {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<SalesRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = SalesRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Numeric sales columns of the table.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
pub enum SalesColumn {
    #[strum(serialize = "NA_Sales")]
    #[serde(rename = "NA_Sales")]
    NaSales,
    #[strum(serialize = "EU_Sales")]
    #[serde(rename = "EU_Sales")]
    EuSales,
    #[strum(serialize = "JP_Sales")]
    #[serde(rename = "JP_Sales")]
    JpSales,
    #[strum(serialize = "Other_Sales")]
    #[serde(rename = "Other_Sales")]
    OtherSales,
    #[strum(serialize = "Global_Sales")]
    #[serde(rename = "Global_Sales")]
    GlobalSales,
}

/// The four territory-specific sales columns a user may pick.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
)]
pub enum Region {
    #[default]
    #[strum(serialize = "NA_Sales")]
    #[serde(rename = "NA_Sales")]
    NaSales,
    #[strum(serialize = "EU_Sales")]
    #[serde(rename = "EU_Sales")]
    EuSales,
    #[strum(serialize = "JP_Sales")]
    #[serde(rename = "JP_Sales")]
    JpSales,
    #[strum(serialize = "Other_Sales")]
    #[serde(rename = "Other_Sales")]
    OtherSales,
}

impl Region {
    /// Sales column backing this region.
    pub fn column(self) -> SalesColumn {
        match self {
            Region::NaSales => SalesColumn::NaSales,
            Region::EuSales => SalesColumn::EuSales,
            Region::JpSales => SalesColumn::JpSales,
            Region::OtherSales => SalesColumn::OtherSales,
        }
    }

    /// Human-readable name: the column identifier with underscores as spaces.
    pub fn label(self) -> String {
        self.as_ref().replace('_', " ")
    }

    /// Column identifiers in selection order.
    pub fn options() -> Vec<String> {
        Self::iter().map(|r| r.to_string()).collect()
    }
}

impl FromStr for Region {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|r| r.as_ref() == s.trim())
            .ok_or_else(|| CoreError::UnknownRegion(s.to_string()))
    }
}

/// Dimension used to group or filter titles.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumIter,
)]
pub enum CategoryDimension {
    #[default]
    Genre,
    Platform,
}

impl CategoryDimension {
    pub fn options() -> Vec<String> {
        Self::iter().map(|d| d.to_string()).collect()
    }
}

impl FromStr for CategoryDimension {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|d| d.as_ref() == s.trim())
            .ok_or_else(|| CoreError::UnknownDimension(s.to_string()))
    }
}

/// Inclusive range of years considered plausible release dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: 1950,
            max: 2100,
        }
    }
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.min > self.max {
            return Err(CoreError::InvertedYearRange(self.min, self.max));
        }
        Ok(())
    }
}

/// Outcome of coercing a raw cell into a typed value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Coerced<T> {
    Value(T),
    /// Blank cell.
    Missing,
    /// Non-blank cell that could not be coerced; carries the raw text.
    Invalid(String),
}

impl<T> Coerced<T> {
    pub fn value(self) -> Option<T> {
        match self {
            Coerced::Value(v) => Some(v),
            Coerced::Missing | Coerced::Invalid(_) => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Coerced::Invalid(_))
    }
}

/// Coerce a raw year cell.
///
/// Accepts integers and integral floats ("2006", "2006.0") inside `range`.
/// Anything else, including "N/A" and fractional years, is invalid.
pub fn coerce_year(raw: &str, range: YearRange) -> Coerced<i32> {
    let text = raw.trim();
    if text.is_empty() {
        return Coerced::Missing;
    }
    let year = match text.parse::<i32>() {
        Ok(y) => Some(y),
        Err(_) => text
            .parse::<f64>()
            .ok()
            // Fractional years are rejected, not truncated: "2006.5" leaves
            // the year views instead of counting toward 2006.
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .filter(|f| *f >= i32::MIN as f64 && *f <= i32::MAX as f64)
            .map(|f| f as i32),
    };
    match year {
        Some(y) if range.contains(y) => Coerced::Value(y),
        _ => Coerced::Invalid(text.to_string()),
    }
}

/// Coerce a raw sales cell. Negative figures are invalid.
pub fn coerce_sales(raw: &str) -> Coerced<Decimal> {
    let text = raw.trim();
    if text.is_empty() {
        return Coerced::Missing;
    }
    let parsed = Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
        .or_else(|| {
            text.parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .and_then(Decimal::from_f64)
        });
    match parsed {
        Some(v) if v >= Decimal::ZERO => Coerced::Value(v.normalize()),
        _ => Coerced::Invalid(text.to_string()),
    }
}

/// Errors for domain invariants and identifier parsing.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("unknown region column: {0}")]
    UnknownRegion(String),
    #[error("unknown category dimension: {0}")]
    UnknownDimension(String),
    #[error("year range [{0}, {1}] is inverted")]
    InvertedYearRange(i32, i32),
}
