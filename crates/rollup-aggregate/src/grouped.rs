//! Partition-then-reduce aggregation

use crate::reducer::GroupReducer;
use std::collections::HashMap;
use std::hash::Hash;

/// Groups records by key and reduces every group
///
/// Stateless; every call is a pure function of its inputs. Records for
/// which the key extractor yields `None` belong to no group.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedAggregator;

impl GroupedAggregator {
    /// Partition records by key in a single pass
    ///
    /// Keys are compared exactly. Within a group, members keep their input
    /// order. Only keys observed in the input appear in the result, and
    /// no group is ever empty.
    pub fn partition<'a, R, K, F>(records: &'a [R], key_fn: F) -> HashMap<K, Vec<&'a R>>
    where
        K: Eq + Hash,
        F: Fn(&'a R) -> Option<K>,
    {
        let mut groups: HashMap<K, Vec<&'a R>> = HashMap::new();
        for record in records {
            if let Some(key) = key_fn(record) {
                groups.entry(key).or_default().push(record);
            }
        }
        groups
    }

    /// Partition records by key, then reduce each group
    ///
    /// # Returns
    /// One summary per distinct key present in `records`.
    pub fn aggregate<'a, R, K, F, S>(
        records: &'a [R],
        key_fn: F,
        reducer: &S,
    ) -> HashMap<K, S::Summary>
    where
        K: Eq + Hash,
        F: Fn(&'a R) -> Option<K>,
        S: GroupReducer<R>,
    {
        let groups = Self::partition(records, key_fn);
        tracing::trace!(
            reducer = reducer.name(),
            records = records.len(),
            groups = groups.len(),
            "reducing groups"
        );

        groups
            .into_iter()
            .map(|(key, members)| (key, reducer.reduce(members)))
            .collect()
    }
}
