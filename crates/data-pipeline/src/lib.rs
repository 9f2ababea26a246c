#![deny(warnings)]

//! Aggregation pipeline: pure functions from the sales table and the current
//! filter values to the derived tables each chart consumes.
//!
//! Every function here is total. Malformed input degrades to an empty table
//! or a default value, and the reason is reported as a [`Degradation`].

pub mod aggregate;
pub mod category;
pub mod normalize;
pub mod region;
pub mod select;
pub mod views;
pub mod year;

pub use aggregate::{group_sum, GroupOrder, GroupedSums};
pub use category::{category_options, category_top, CategorySelection};
pub use normalize::{normalize_years, NormalizedDataset, YearedRecord};
pub use region::{regional_top, RegionalTop};
pub use select::{top_n, Ranked};
pub use views::{annual_trend, genre_sales, platform_share, top_global};
pub use year::{parse_year_text, YearParse, YearSlider};

use serde::{Deserialize, Serialize};

/// Why a section rendered less than the user asked for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Degradation {
    /// Rows dropped because a cell in `column` could not be coerced.
    TypeCoercionFailure {
        column: String,
        excluded_rows: usize,
    },
    /// The requested selection was unusable and `fallback` was used instead.
    SelectionOutOfRange { input: String, fallback: i32 },
    /// The filter combination matched nothing.
    EmptyResult,
}
