//! Category explorer: top titles within one genre or platform.

use crate::select::{top_n, Ranked};
use indexmap::IndexSet;
use sales_core::{CategoryDimension, SalesColumn, SalesRecord};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Distinct values of `dimension`, in order of first appearance.
pub fn category_options<'a, I>(records: I, dimension: CategoryDimension) -> Vec<String>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let distinct: IndexSet<&str> = records.into_iter().map(|r| r.category(dimension)).collect();
    distinct.into_iter().map(str::to_string).collect()
}

/// The chosen dimension and, conditioned on it, the chosen value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySelection {
    pub dimension: CategoryDimension,
    pub value: Option<String>,
}

impl CategorySelection {
    /// Select the first option of `dimension`.
    pub fn first_of(dimension: CategoryDimension, options: &[String]) -> Self {
        Self {
            dimension,
            value: options.first().cloned(),
        }
    }

    /// Switch dimension. A change resets the value to the new first option.
    pub fn with_dimension(&self, dimension: CategoryDimension, options: &[String]) -> Self {
        if dimension == self.dimension {
            return self.clone().reconcile(options);
        }
        Self::first_of(dimension, options)
    }

    /// Keep the value if it is still offered, otherwise take the first option.
    pub fn reconcile(self, options: &[String]) -> Self {
        match &self.value {
            Some(v) if options.contains(v) => self,
            _ => Self::first_of(self.dimension, options),
        }
    }
}

/// Top `n` titles by global sales among records matching `selection`.
pub fn category_top<'a, I>(
    records: I,
    selection: &CategorySelection,
    n: NonZeroUsize,
) -> Vec<Ranked<&'a SalesRecord>>
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let Some(value) = selection.value.as_deref() else {
        return Vec::new();
    };
    let dimension = selection.dimension;
    top_n(
        records
            .into_iter()
            .filter(|r| r.category(dimension) == value),
        n,
        |r| r.sales(SalesColumn::GlobalSales),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{game, scenario};

    fn ten() -> NonZeroUsize {
        NonZeroUsize::new(10).unwrap()
    }

    #[test]
    fn options_in_first_seen_order() {
        let ds = scenario();
        assert_eq!(
            category_options(ds.records(), CategoryDimension::Genre),
            vec!["Sports", "Action"]
        );
        assert_eq!(
            category_options(ds.records(), CategoryDimension::Platform),
            vec!["Wii", "X360", "PS2"]
        );
    }

    #[test]
    fn changing_dimension_resets_value() {
        let ds = scenario();
        let genres = category_options(ds.records(), CategoryDimension::Genre);
        let platforms = category_options(ds.records(), CategoryDimension::Platform);
        let sel = CategorySelection {
            dimension: CategoryDimension::Genre,
            value: Some("Action".into()),
        };
        let same = sel.with_dimension(CategoryDimension::Genre, &genres);
        assert_eq!(same.value.as_deref(), Some("Action"));
        let switched = sel.with_dimension(CategoryDimension::Platform, &platforms);
        assert_eq!(switched.dimension, CategoryDimension::Platform);
        assert_eq!(switched.value.as_deref(), Some("Wii"));
    }

    #[test]
    fn stale_value_is_reconciled() {
        let sel = CategorySelection {
            dimension: CategoryDimension::Genre,
            value: Some("Racing".into()),
        };
        let options = vec!["Sports".to_string()];
        assert_eq!(sel.reconcile(&options).value.as_deref(), Some("Sports"));
        let empty = CategorySelection::first_of(CategoryDimension::Platform, &[]);
        assert_eq!(empty.value, None);
    }

    #[test]
    fn top_titles_within_value() {
        let mut ds: Vec<SalesRecord> = scenario().records().to_vec();
        for i in 0..12 {
            ds.push(game(&format!("Sport{i}"), "DS", "2008", "Sports", i));
        }
        let sel = CategorySelection {
            dimension: CategoryDimension::Genre,
            value: Some("Sports".into()),
        };
        let top = category_top(ds.iter(), &sel, ten());
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].item.name, "GameA");
        assert!(top.iter().all(|r| r.item.genre == "Sports"));
    }

    #[test]
    fn no_value_means_empty() {
        let ds = scenario();
        let sel = CategorySelection::first_of(CategoryDimension::Genre, &[]);
        assert!(category_top(ds.records(), &sel, ten()).is_empty());
    }
}
