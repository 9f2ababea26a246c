//! Grouped sums.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::hash::Hash;

/// Order in which groups are reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupOrder {
    /// Ascending key order; used for time series.
    Ascending,
    /// Order of first appearance in the input; used for categories.
    FirstSeen,
}

/// Per-key sums of a value column, in a deterministic order.
#[derive(Clone, Debug, PartialEq)]
pub struct GroupedSums<K> {
    groups: Vec<(K, Decimal)>,
}

impl<K> Default for GroupedSums<K> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

/// Sum `value` per distinct `key`. Absent values count as zero but still
/// create their group.
pub fn group_sum<I, T, K, FK, FV>(rows: I, key: FK, value: FV, order: GroupOrder) -> GroupedSums<K>
where
    I: IntoIterator<Item = T>,
    K: Ord + Hash,
    FK: Fn(&T) -> K,
    FV: Fn(&T) -> Option<Decimal>,
{
    let groups = match order {
        GroupOrder::Ascending => {
            let mut sums: BTreeMap<K, Decimal> = BTreeMap::new();
            for row in rows {
                *sums.entry(key(&row)).or_insert(Decimal::ZERO) +=
                    value(&row).unwrap_or(Decimal::ZERO);
            }
            sums.into_iter().collect()
        }
        GroupOrder::FirstSeen => {
            let mut sums: IndexMap<K, Decimal> = IndexMap::new();
            for row in rows {
                *sums.entry(key(&row)).or_insert(Decimal::ZERO) +=
                    value(&row).unwrap_or(Decimal::ZERO);
            }
            sums.into_iter().collect()
        }
    };
    GroupedSums { groups }
}

impl<K> GroupedSums<K> {
    pub fn groups(&self) -> &[(K, Decimal)] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum over all groups.
    pub fn total(&self) -> Decimal {
        self.groups.iter().map(|(_, v)| *v).sum()
    }

    /// Drop groups whose sum is exactly zero.
    pub fn without_zero_groups(self) -> Self {
        Self {
            groups: self
                .groups
                .into_iter()
                .filter(|(_, v)| !v.is_zero())
                .collect(),
        }
    }
}

impl<K: PartialEq> GroupedSums<K> {
    pub fn get(&self, key: &K) -> Option<Decimal> {
        self.groups.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }
}
