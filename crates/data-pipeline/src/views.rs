//! The derived tables behind the dashboard's year-keyed and global charts.

use crate::aggregate::{group_sum, GroupOrder, GroupedSums};
use crate::normalize::NormalizedDataset;
use crate::select::{top_n, Ranked};
use sales_core::{Dataset, SalesColumn, SalesRecord};
use std::num::NonZeroUsize;

/// Best sellers worldwide. Runs on the raw table, so rows with an unusable
/// year still compete.
pub fn top_global(dataset: &Dataset, n: NonZeroUsize) -> Vec<Ranked<&SalesRecord>> {
    top_n(dataset.records(), n, |r| r.sales(SalesColumn::GlobalSales))
}

/// Global sales per year, ascending. Zero years are kept.
pub fn annual_trend(data: &NormalizedDataset) -> GroupedSums<i32> {
    group_sum(
        data.rows(),
        |r| r.year,
        |r| r.record.sales(SalesColumn::GlobalSales),
        GroupOrder::Ascending,
    )
}

/// Global sales per platform within `year`. Platforms summing to zero are dropped.
pub fn platform_share(data: &NormalizedDataset, year: i32) -> GroupedSums<String> {
    group_sum(
        data.in_year(year),
        |r| r.platform.clone(),
        |r| r.sales(SalesColumn::GlobalSales),
        GroupOrder::FirstSeen,
    )
    .without_zero_groups()
}

/// Global sales per genre within `year`. Genres summing to zero are dropped.
pub fn genre_sales(data: &NormalizedDataset, year: i32) -> GroupedSums<String> {
    group_sum(
        data.in_year(year),
        |r| r.genre.clone(),
        |r| r.sales(SalesColumn::GlobalSales),
        GroupOrder::FirstSeen,
    )
    .without_zero_groups()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{game, scenario};
    use crate::normalize::normalize_years;
    use rust_decimal::Decimal;
    use sales_core::YearRange;

    fn ten() -> NonZeroUsize {
        NonZeroUsize::new(10).unwrap()
    }

    #[test]
    fn genre_sales_for_selected_year() {
        let n = normalize_years(&scenario(), YearRange::default());
        let g = genre_sales(&n, 2006);
        assert_eq!(
            g.groups(),
            &[
                ("Sports".to_string(), Decimal::new(80, 0)),
                ("Action".to_string(), Decimal::new(20, 0)),
            ]
        );
    }

    #[test]
    fn single_platform_year_is_one_slice() {
        let ds: Dataset = vec![
            game("A", "PS2", "2001", "Action", 4),
            game("B", "PS2", "2001", "Racing", 6),
            game("C", "GBA", "2001", "Puzzle", 0),
            game("D", "Wii", "2007", "Sports", 9),
        ]
        .into_iter()
        .collect();
        let n = normalize_years(&ds, YearRange::default());
        let share = platform_share(&n, 2001);
        assert_eq!(share.groups(), &[("PS2".to_string(), Decimal::new(10, 0))]);
        assert_eq!(share.total(), Decimal::new(10, 0));
    }

    #[test]
    fn trend_keeps_zero_years_and_sorts() {
        let ds: Dataset = vec![
            game("A", "PS2", "2003", "Action", 4),
            game("B", "NES", "1985", "Platform", 0),
            game("C", "PS2", "2001", "Action", 2),
            game("D", "PS2", "N/A", "Action", 100),
        ]
        .into_iter()
        .collect();
        let n = normalize_years(&ds, YearRange::default());
        let t = annual_trend(&n);
        let years: Vec<i32> = t.groups().iter().map(|(y, _)| *y).collect();
        assert_eq!(years, vec![1985, 2001, 2003]);
        assert_eq!(t.get(&1985), Some(Decimal::ZERO));
    }

    #[test]
    fn top_global_uses_rows_without_year() {
        let ds: Dataset = vec![
            game("Known", "PS2", "2003", "Action", 4),
            game("Undated", "PS2", "N/A", "Action", 100),
        ]
        .into_iter()
        .collect();
        let top = top_global(&ds, ten());
        assert_eq!(top[0].item.name, "Undated");
        assert_eq!(top.len(), 2);
    }

    #[test]
    fn unnamed_rows_reach_year_views() {
        let ds: Dataset = vec![
            game("", "PS2", "2006", "Sports", 4),
            game("Tetris", "GB", "2006", "Sports", 6),
        ]
        .into_iter()
        .collect();
        let n = normalize_years(&ds, YearRange::default());
        assert_eq!(
            genre_sales(&n, 2006).groups(),
            &[("Sports".to_string(), Decimal::new(10, 0))]
        );
        assert_eq!(annual_trend(&n).get(&2006), Some(Decimal::new(10, 0)));
        assert_eq!(platform_share(&n, 2006).len(), 2);
    }

    #[test]
    fn absent_year_gives_empty_views() {
        let n = normalize_years(&scenario(), YearRange::default());
        assert!(platform_share(&n, 1999).is_empty());
        assert!(genre_sales(&n, 1999).is_empty());
    }
}
