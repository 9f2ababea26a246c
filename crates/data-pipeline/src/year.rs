//! Resolving the "current year" from the two year controls.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Bounds and default of the year slider, derived from the valid years.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSlider {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl YearSlider {
    /// `None` when there is no valid year to select.
    pub fn from_years(years: &BTreeSet<i32>) -> Option<Self> {
        let min = *years.first()?;
        let max = *years.last()?;
        Some(Self {
            min,
            max,
            default: min,
        })
    }

    /// The requested year clamped into range, or the default.
    pub fn resolve(&self, requested: Option<i32>) -> i32 {
        requested
            .map(|y| y.clamp(self.min, self.max))
            .unwrap_or(self.default)
    }
}

/// Result of parsing the free-text year box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum YearParse {
    Valid(i32),
    Empty,
    NotNumeric(String),
    NotInDataset(i64),
}

impl YearParse {
    /// The parsed year, or `default` for every failure.
    pub fn resolve(&self, default: i32) -> i32 {
        match self {
            YearParse::Valid(y) => *y,
            YearParse::Empty | YearParse::NotNumeric(_) | YearParse::NotInDataset(_) => default,
        }
    }

    pub fn is_fallback(&self) -> bool {
        !matches!(self, YearParse::Valid(_))
    }
}

/// Parse free text as an integer year that must be one of `valid_years`.
pub fn parse_year_text(text: &str, valid_years: &BTreeSet<i32>) -> YearParse {
    let text = text.trim();
    if text.is_empty() {
        return YearParse::Empty;
    }
    match text.parse::<i64>() {
        Ok(n) => match i32::try_from(n) {
            Ok(y) if valid_years.contains(&y) => YearParse::Valid(y),
            _ => YearParse::NotInDataset(n),
        },
        Err(_) => YearParse::NotNumeric(text.to_string()),
    }
}
