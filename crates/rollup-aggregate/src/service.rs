//! Validated aggregation services
//!
//! Each service runs its validator to completion before aggregating, so a
//! caller sees either a complete result or a single [`ValidationError`].

use crate::grouped::GroupedAggregator;
use crate::join::JoinAggregator;
use crate::reducer::SumSorted;
use rollup_model::{Collaborator, Collaborators, Company, Employee, Keyed, Office, SectorSummary, Weighted};
use rollup_validate::{validate_join, ValidationError, Validator};
use std::collections::HashMap;

/// Sector name to summary
pub type SectorSummaries = HashMap<String, SectorSummary>;

/// Salary totals per sector
#[derive(Debug, Clone, Copy, Default)]
pub struct SectorService;

impl SectorService {
    /// Create sector service
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Summarise collaborators per sector
    ///
    /// Salaries are checked before sectors.
    ///
    /// # Errors
    /// - [`ValidationError::InvalidSalary`] if any salary is missing or negative
    /// - [`ValidationError::InvalidSector`] if any sector is missing
    pub fn compile(&self, collaborators: &Collaborators) -> Result<SectorSummaries, ValidationError> {
        let records = collaborators.as_slice();
        Validator::salaries().validate(records)?;

        let reducer = SumSorted::new(<Collaborator as Weighted>::amount);
        let rollups = GroupedAggregator::aggregate(
            records,
            |c| c.group_key().map(str::to_owned),
            &reducer,
        );
        tracing::debug!(
            collaborators = records.len(),
            sectors = rollups.len(),
            "compiled sector summaries"
        );

        Ok(rollups
            .into_iter()
            .map(|(sector, rollup)| (sector, SectorSummary::new(rollup.total, rollup.members)))
            .collect())
    }
}

/// Employees and offices merged per company
#[derive(Debug, Clone, Copy, Default)]
pub struct OfficeService;

impl OfficeService {
    /// Create office service
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Merge employees and offices by company id
    ///
    /// # Returns
    /// - `Ok(None)` if either collection is absent
    /// - `Ok(Some(companies))` ordered ascending by company id; empty when
    ///   both collections are empty
    ///
    /// # Errors
    /// [`ValidationError::InvalidGroupKey`] if any record on either side has
    /// no company id.
    pub fn compile(
        &self,
        employees: Option<&[Employee]>,
        offices: Option<&[Office]>,
    ) -> Result<Option<Vec<Company>>, ValidationError> {
        let (Some(employees), Some(offices)) = (employees, offices) else {
            tracing::debug!(
                employees = employees.is_some(),
                offices = offices.is_some(),
                "input collection absent, no result"
            );
            return Ok(None);
        };

        validate_join(employees, offices)?;

        let companies: Vec<Company> = JoinAggregator::join(employees, offices)
            .into_iter()
            .map(|group| Company::new(group.key, group.left, group.right))
            .collect();
        tracing::debug!(companies = companies.len(), "compiled companies");

        Ok(Some(companies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollup_validate::{ErrorKind, Side};

    #[test]
    fn sector_service_rejects_before_aggregating() {
        let staff = Collaborators::new(vec![
            Collaborator::in_sector("ok", 10.0, "A"),
            Collaborator::new("bad", Some(-1.0), None),
        ]);
        let err = SectorService::new().compile(&staff).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSalary);
    }

    #[test]
    fn office_service_absent_beats_invalid() {
        let employees = vec![Employee::new("Maycow Antunes", None)];
        let result = OfficeService::new().compile(Some(employees.as_slice()), None).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn office_service_reports_side() {
        let employees = vec![Employee::of("Maycow Antunes", "Meli")];
        let offices = vec![Office::new("Meli Floripa", None)];
        let err = OfficeService::new()
            .compile(Some(employees.as_slice()), Some(offices.as_slice()))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidGroupKey {
                side: Side::Right,
                index: 0
            }
        );
    }

    #[test]
    fn office_service_empty_inputs() {
        let employees: Vec<Employee> = vec![];
        let offices: Vec<Office> = vec![];
        let result = OfficeService::new()
            .compile(Some(employees.as_slice()), Some(offices.as_slice()))
            .unwrap();
        assert_eq!(result, Some(vec![]));
    }
}
