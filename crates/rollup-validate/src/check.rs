//! Individual collection checks

use crate::error::{Side, ValidationError};
use rollup_model::{Keyed, Weighted};

/// Predicate over an entire record collection
///
/// A check reports the first violating record only; it never collects
/// every violation.
pub trait RecordCheck<R>: Send + Sync {
    /// Check all records
    ///
    /// # Returns
    /// - `Ok(())` if every record passes (always for an empty slice)
    /// - `Err(ValidationError)` for the first record that does not
    fn check(&self, records: &[R]) -> Result<(), ValidationError>;

    /// Check name (for tracing)
    fn name(&self) -> &'static str;
}

/// Rejects records whose amount is missing, negative or NaN
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountCheck;

impl AmountCheck {
    /// Create amount check
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Whether a single amount is acceptable
    #[inline]
    #[must_use]
    pub fn accepts(amount: Option<f64>) -> bool {
        // NaN compares false, so it is rejected with negatives
        amount.is_some_and(|a| a >= 0.0)
    }
}

impl<R: Weighted> RecordCheck<R> for AmountCheck {
    fn check(&self, records: &[R]) -> Result<(), ValidationError> {
        match records.iter().position(|r| !Self::accepts(r.amount())) {
            Some(index) => Err(ValidationError::InvalidSalary { index }),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        "amount"
    }
}

/// What a missing key means, which decides the error raised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// Sector of a salary record
    Sector,

    /// Company id on one side of a join
    Company(Side),
}

/// Rejects records without a group key
#[derive(Debug, Clone, Copy)]
pub struct KeyCheck {
    role: KeyRole,
}

impl KeyCheck {
    /// Create key check for `role`
    #[inline]
    #[must_use]
    pub fn new(role: KeyRole) -> Self {
        Self { role }
    }

    /// Sector key check
    #[inline]
    #[must_use]
    pub fn sector() -> Self {
        Self::new(KeyRole::Sector)
    }

    /// Company key check for one side of a join
    #[inline]
    #[must_use]
    pub fn company(side: Side) -> Self {
        Self::new(KeyRole::Company(side))
    }

    /// Role of this check
    #[inline]
    #[must_use]
    pub fn role(&self) -> KeyRole {
        self.role
    }

    fn error(self, index: usize) -> ValidationError {
        match self.role {
            KeyRole::Sector => ValidationError::InvalidSector { index },
            KeyRole::Company(side) => ValidationError::InvalidGroupKey { side, index },
        }
    }
}

impl<R: Keyed> RecordCheck<R> for KeyCheck {
    fn check(&self, records: &[R]) -> Result<(), ValidationError> {
        match records.iter().position(|r| r.group_key().is_none()) {
            Some(index) => Err(self.error(index)),
            None => Ok(()),
        }
    }

    fn name(&self) -> &'static str {
        match self.role {
            KeyRole::Sector => "sector",
            KeyRole::Company(_) => "company",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollup_model::{Collaborator, Office};

    #[test]
    fn amount_accepts_zero() {
        assert!(AmountCheck::accepts(Some(0.0)));
        assert!(!AmountCheck::accepts(Some(-0.01)));
        assert!(!AmountCheck::accepts(Some(f64::NAN)));
        assert!(!AmountCheck::accepts(None));
    }

    #[test]
    fn amount_reports_first_offender() {
        let records = vec![
            Collaborator::in_sector("a", 1.0, "S"),
            Collaborator::new("b", None, None),
            Collaborator::new("c", Some(-5.0), None),
        ];
        let err = AmountCheck.check(&records).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSalary { index: 1 });
    }

    #[test]
    fn key_check_maps_role_to_error() {
        let offices = vec![Office::of("Meli Floripa", "Meli"), Office::new("x", None)];
        let err = KeyCheck::company(Side::Right).check(&offices).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidGroupKey {
                side: Side::Right,
                index: 1
            }
        );

        let staff = vec![Collaborator::new("a", Some(1.0), None)];
        let err = KeyCheck::sector().check(&staff).unwrap_err();
        assert_eq!(err, ValidationError::InvalidSector { index: 0 });
    }

    #[test]
    fn empty_input_passes() {
        let empty: Vec<Collaborator> = vec![];
        assert!(AmountCheck.check(&empty).is_ok());
        assert!(KeyCheck::sector().check(&empty).is_ok());
    }
}
