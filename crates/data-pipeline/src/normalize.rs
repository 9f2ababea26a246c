//! Year normalization.
//!
//! Produces a typed copy of the table holding only rows whose year coerces to
//! an integer. The source [`Dataset`] is never touched, so views that do not
//! depend on the year keep seeing every row.

use sales_core::{coerce_year, Coerced, Dataset, SalesRecord, YearRange};
use std::collections::BTreeSet;
use tracing::debug;

/// A record paired with its coerced release year.
#[derive(Clone, Debug, PartialEq)]
pub struct YearedRecord {
    pub year: i32,
    pub record: SalesRecord,
}

/// Rows with a valid year, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedDataset {
    rows: Vec<YearedRecord>,
    excluded: usize,
}

/// Coerce every row's year, keeping only rows that coerce.
pub fn normalize_years(dataset: &Dataset, range: YearRange) -> NormalizedDataset {
    let mut rows = Vec::with_capacity(dataset.len());
    let mut excluded = 0usize;
    for record in dataset.records() {
        match coerce_year(&record.year, range) {
            Coerced::Value(year) => rows.push(YearedRecord {
                year,
                record: record.clone(),
            }),
            Coerced::Missing | Coerced::Invalid(_) => excluded += 1,
        }
    }
    if excluded > 0 {
        debug!(
            excluded,
            kept = rows.len(),
            "dropped rows without a usable year"
        );
    }
    NormalizedDataset { rows, excluded }
}

impl NormalizedDataset {
    pub fn rows(&self) -> &[YearedRecord] {
        &self.rows
    }

    /// Number of source rows dropped for an unusable year.
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Records without their year, for year-agnostic views.
    pub fn records(&self) -> impl Iterator<Item = &SalesRecord> + '_ {
        self.rows.iter().map(|r| &r.record)
    }

    /// Records released in `year`.
    pub fn in_year(&self, year: i32) -> impl Iterator<Item = &SalesRecord> + '_ {
        self.rows
            .iter()
            .filter(move |r| r.year == year)
            .map(|r| &r.record)
    }

    /// Distinct years present, ascending.
    pub fn valid_years(&self) -> BTreeSet<i32> {
        self.rows.iter().map(|r| r.year).collect()
    }

    /// Back to a plain table with the year written in canonical form.
    pub fn to_dataset(&self) -> Dataset {
        self.rows
            .iter()
            .map(|r| SalesRecord {
                year: r.year.to_string(),
                ..r.record.clone()
            })
            .collect()
    }
}
