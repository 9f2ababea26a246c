//! Top-N selection.

use rust_decimal::Decimal;
use serde::Serialize;
use std::num::NonZeroUsize;

/// An item kept by a ranking, with the value it was ranked by.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Ranked<T> {
    pub item: T,
    pub value: Decimal,
}

/// The `n` items with the largest `key`, largest first.
///
/// Ties keep input order. Items whose key is `None` are not ranked. When fewer
/// than `n` items have a key, all of them are returned.
pub fn top_n<I, T, F>(items: I, n: NonZeroUsize, key: F) -> Vec<Ranked<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Option<Decimal>,
{
    let mut ranked: Vec<Ranked<T>> = items
        .into_iter()
        .filter_map(|item| key(&item).map(|value| Ranked { item, value }))
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.value.cmp(&a.value));
    ranked.truncate(n.get());
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn picks_largest_in_descending_order() {
        let values = [3i64, 9, 1, 7, 5];
        let top = top_n(values.iter().enumerate(), nz(3), |(_, v)| {
            Some(Decimal::new(**v, 0))
        });
        let idx: Vec<usize> = top.iter().map(|r| r.item.0).collect();
        assert_eq!(idx, vec![1, 3, 4]);
    }

    #[test]
    fn ties_keep_input_order() {
        let values = [2i64, 5, 2, 5, 2];
        let top = top_n(values.iter().enumerate(), nz(4), |(_, v)| {
            Some(Decimal::new(**v, 0))
        });
        let idx: Vec<usize> = top.iter().map(|r| r.item.0).collect();
        assert_eq!(idx, vec![1, 3, 0, 2]);
    }

    #[test]
    fn short_tables_and_missing_keys() {
        let values = [Some(1i64), None, Some(4)];
        let top = top_n(values.iter(), nz(10), |v| v.map(|x| Decimal::new(x, 0)));
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].value, Decimal::new(4, 0));
        let empty: [i64; 0] = [];
        let none = top_n(empty.iter(), nz(1), |v| Some(Decimal::new(**v, 0)));
        assert!(none.is_empty());
    }

    proptest! {
        #[test]
        fn size_and_dominance(values in proptest::collection::vec(0i64..1_000, 0..60), n in 1usize..20) {
            let top = top_n(values.iter().enumerate(), nz(n), |(_, v)| Some(Decimal::new(**v, 2)));
            prop_assert_eq!(top.len(), n.min(values.len()));
            let chosen: std::collections::BTreeSet<usize> = top.iter().map(|r| r.item.0).collect();
            let min_chosen = top.iter().map(|r| r.value).min();
            if let Some(min_chosen) = min_chosen {
                for (i, v) in values.iter().enumerate() {
                    if !chosen.contains(&i) {
                        prop_assert!(Decimal::new(*v, 2) <= min_chosen);
                    }
                }
            }
            for w in top.windows(2) {
                prop_assert!(w[0].value >= w[1].value);
            }
        }
    }
}
