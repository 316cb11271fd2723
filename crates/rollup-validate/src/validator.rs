//! Ordered, fail-fast validators

use crate::check::{AmountCheck, KeyCheck, RecordCheck};
use crate::error::{Side, ValidationError};
use rollup_model::{Keyed, Weighted};
use std::fmt;

/// Ordered sequence of checks applied to one collection
///
/// Checks run in insertion order. The first failing check aborts
/// validation; later checks are not run.
pub struct Validator<R> {
    checks: Vec<Box<dyn RecordCheck<R>>>,
}

impl<R> Validator<R> {
    /// Create validator with no checks
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Append a check
    #[must_use]
    pub fn with_check(mut self, check: impl RecordCheck<R> + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Run every check in order
    ///
    /// # Errors
    /// The error of the first failing check.
    pub fn validate(&self, records: &[R]) -> Result<(), ValidationError> {
        for check in &self.checks {
            tracing::trace!(check = check.name(), records = records.len(), "running check");
            if let Err(err) = check.check(records) {
                tracing::debug!(check = check.name(), index = err.index(), "validation failed: {err}");
                return Err(err);
            }
        }
        Ok(())
    }

    /// Number of checks
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if no checks are registered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Names of the checks in run order
    #[must_use]
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }
}

impl<R: Weighted + Keyed> Validator<R> {
    /// Salary-summary validator: amounts first, then sectors
    #[must_use]
    pub fn salaries() -> Self {
        Self::new()
            .with_check(AmountCheck::new())
            .with_check(KeyCheck::sector())
    }
}

impl<R: Keyed> Validator<R> {
    /// Company-key validator for one side of a join
    #[must_use]
    pub fn company_keys(side: Side) -> Self {
        Self::new().with_check(KeyCheck::company(side))
    }
}

impl<R> Default for Validator<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Validator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("checks", &self.check_names())
            .finish()
    }
}

/// Validate both inputs of a company join
///
/// The left collection is checked first.
///
/// # Errors
/// [`ValidationError::InvalidGroupKey`] naming the side and index of the
/// first record without a key.
pub fn validate_join<L: Keyed, R: Keyed>(left: &[L], right: &[R]) -> Result<(), ValidationError> {
    Validator::company_keys(Side::Left).validate(left)?;
    Validator::company_keys(Side::Right).validate(right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rollup_model::{Collaborator, Employee, Office};

    #[test]
    fn salaries_check_order() {
        let v: Validator<Collaborator> = Validator::salaries();
        assert_eq!(v.check_names(), vec!["amount", "sector"]);
    }

    #[test]
    fn salary_failure_wins_over_sector() {
        let records = vec![
            Collaborator::new("no sector", Some(10.0), None),
            Collaborator::new("no salary", None, Some(rollup_model::Sector::new("S"))),
        ];
        let err = Validator::salaries().validate(&records).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSalary);
        assert_eq!(err.index(), 1);
    }

    #[test]
    fn empty_validator_accepts_anything() {
        let v: Validator<Collaborator> = Validator::new();
        assert!(v.is_empty());
        assert!(v.validate(&[Collaborator::new("x", None, None)]).is_ok());
    }

    #[test]
    fn join_checks_left_before_right() {
        let left = vec![Employee::new("Maycow Antunes", None)];
        let right = vec![Office::new("Meli Floripa", None)];
        let err = validate_join(&left, &right).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidGroupKey {
                side: Side::Left,
                index: 0
            }
        );

        let left = vec![Employee::of("Maycow Antunes", "Meli")];
        let err = validate_join(&left, &right).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidGroupKey {
                side: Side::Right,
                index: 0
            }
        );
    }

    #[test]
    fn debug_lists_checks() {
        let v: Validator<Collaborator> = Validator::salaries();
        assert_eq!(format!("{v:?}"), r#"Validator { checks: ["amount", "sector"] }"#);
    }
}
