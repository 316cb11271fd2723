//! Per-group reductions
//!
//! Provides the [`GroupReducer`] trait used by
//! [`GroupedAggregator::aggregate`](crate::GroupedAggregator::aggregate).

use serde::{Deserialize, Serialize};

/// Reduction of one group's members into a summary
///
/// Reducers are pure: the same members in the same order always produce
/// an equal summary. Members arrive in input order.
pub trait GroupReducer<R> {
    /// Summary produced per group
    type Summary;

    /// Reduce a non-empty group
    fn reduce(&self, members: Vec<&R>) -> Self::Summary;

    /// Reducer name (for tracing)
    fn name(&self) -> &'static str;
}

/// Sum of a numeric payload plus the members ordered by it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rollup<R> {
    /// Sum of member values
    pub total: f64,

    /// Members sorted ascending by value; equal values keep input order
    pub members: Vec<R>,
}

/// Reducer producing a [`Rollup`] from a value extractor
///
/// Members whose extractor yields `None` are left out of both the total
/// and the member list. Validation rejects such records up front, so in
/// the services this never drops anything.
#[derive(Debug, Clone, Copy)]
pub struct SumSorted<F> {
    value_fn: F,
}

impl<F> SumSorted<F> {
    /// Create reducer over `value_fn`
    #[inline]
    #[must_use]
    pub fn new(value_fn: F) -> Self {
        Self { value_fn }
    }
}

impl<R, F> GroupReducer<R> for SumSorted<F>
where
    R: Clone,
    F: Fn(&R) -> Option<f64>,
{
    type Summary = Rollup<R>;

    fn reduce(&self, members: Vec<&R>) -> Rollup<R> {
        let mut valued: Vec<(f64, &R)> = members
            .into_iter()
            .filter_map(|m| (self.value_fn)(m).map(|v| (v, m)))
            .collect();

        // summed in input order, before sorting
        let total = valued.iter().map(|(v, _)| v).sum();

        // sort_by is stable
        valued.sort_by(|a, b| a.0.total_cmp(&b.0));

        Rollup {
            total,
            members: valued.into_iter().map(|(_, m)| m.clone()).collect(),
        }
    }

    fn name(&self) -> &'static str {
        "sum_sorted"
    }
}
