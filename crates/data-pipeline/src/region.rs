//! Regional explorer: best sellers within one territory.

use crate::select::{top_n, Ranked};
use rust_decimal::Decimal;
use sales_core::{Region, SalesRecord};
use std::num::NonZeroUsize;

/// Ranked rows for one region plus the number of rows whose regional figure
/// could not be coerced.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionalTop<'a> {
    pub region: Region,
    pub rows: Vec<Ranked<&'a SalesRecord>>,
    pub uncoerced: usize,
}

/// Rows with a strictly positive figure for `region`, largest first, at most `n`.
pub fn regional_top<'a, I>(records: I, region: Region, n: NonZeroUsize) -> RegionalTop<'a>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let column = region.column();
    let mut uncoerced = 0usize;
    let mut positive = Vec::new();
    for record in records {
        match record.sales(column) {
            Some(v) if v > Decimal::ZERO => positive.push(record),
            Some(_) => {}
            None => uncoerced += 1,
        }
    }
    let rows = top_n(positive, n, |r| r.sales(column));
    RegionalTop {
        region,
        rows,
        uncoerced,
    }
}
