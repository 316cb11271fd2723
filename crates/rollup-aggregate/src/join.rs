//! Full outer join of two keyed collections

use crate::grouped::GroupedAggregator;
use rollup_model::{Keyed, Named};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Names from both sides that share one key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinedGroup {
    /// Shared group key
    pub key: String,

    /// Left-side names, ascending; `None` if the left side has no match
    pub left: Option<Vec<String>>,

    /// Right-side names, ascending; `None` if the right side has no match
    pub right: Option<Vec<String>>,
}

/// Joins two collections on their group keys
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinAggregator;

impl JoinAggregator {
    /// Join `left` and `right` on [`Keyed::group_key`]
    ///
    /// Each side is partitioned independently. Every key seen on either
    /// side yields exactly one [`JoinedGroup`]; the result is ordered
    /// ascending by key. Names are sorted but not deduplicated.
    pub fn join<L, R>(left: &[L], right: &[R]) -> Vec<JoinedGroup>
    where
        L: Keyed + Named,
        R: Keyed + Named,
    {
        let left_groups = GroupedAggregator::partition(left, |r| r.group_key());
        let right_groups = GroupedAggregator::partition(right, |r| r.group_key());

        let keys: BTreeSet<&str> = left_groups
            .keys()
            .chain(right_groups.keys())
            .copied()
            .collect();

        keys.into_iter()
            .map(|key| JoinedGroup {
                key: key.to_owned(),
                left: Self::sorted_names(&left_groups, key),
                right: Self::sorted_names(&right_groups, key),
            })
            .collect()
    }

    fn sorted_names<T: Named>(groups: &HashMap<&str, Vec<&T>>, key: &str) -> Option<Vec<String>> {
        let members = groups.get(key).filter(|m| !m.is_empty())?;
        let mut names: Vec<String> = members.iter().map(|m| m.name().to_owned()).collect();
        names.sort();
        Some(names)
    }
}
