//! Salary records grouped by sector

use crate::record::{Keyed, Named, Weighted};
use serde::{Deserialize, Serialize};

/// Organisational sector
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sector {
    name: String,
}

impl Sector {
    /// Create sector
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Sector name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Collaborator with an optional salary and sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaborator {
    name: String,
    salary: Option<f64>,
    sector: Option<Sector>,
}

impl Collaborator {
    /// Create collaborator; either field may be missing
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, salary: Option<f64>, sector: Option<Sector>) -> Self {
        Self {
            name: name.into(),
            salary,
            sector,
        }
    }

    /// Create a fully populated collaborator
    #[inline]
    #[must_use]
    pub fn in_sector(name: impl Into<String>, salary: f64, sector: impl Into<String>) -> Self {
        Self::new(name, Some(salary), Some(Sector::new(sector)))
    }

    /// Salary, if known
    #[inline]
    #[must_use]
    pub fn salary(&self) -> Option<f64> {
        self.salary
    }

    /// Sector, if assigned
    #[inline]
    #[must_use]
    pub fn sector(&self) -> Option<&Sector> {
        self.sector.as_ref()
    }
}

impl Keyed for Collaborator {
    fn group_key(&self) -> Option<&str> {
        self.sector.as_ref().map(Sector::name)
    }
}

impl Named for Collaborator {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Weighted for Collaborator {
    fn amount(&self) -> Option<f64> {
        self.salary
    }
}

/// Collection of collaborators handed to the sector service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collaborators(Vec<Collaborator>);

impl Collaborators {
    /// Wrap collaborators
    #[inline]
    #[must_use]
    pub fn new(collaborators: Vec<Collaborator>) -> Self {
        Self(collaborators)
    }

    /// Borrow as slice
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Collaborator] {
        &self.0
    }

    /// Number of collaborators
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Collaborator>> for Collaborators {
    fn from(collaborators: Vec<Collaborator>) -> Self {
        Self(collaborators)
    }
}

impl FromIterator<Collaborator> for Collaborators {
    fn from_iter<I: IntoIterator<Item = Collaborator>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Salary total and salary-ordered members of one sector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSummary {
    /// Sum of member salaries
    pub total: f64,

    /// Members sorted ascending by salary
    pub collaborators: Vec<Collaborator>,
}

impl SectorSummary {
    /// Create summary
    #[inline]
    #[must_use]
    pub fn new(total: f64, collaborators: Vec<Collaborator>) -> Self {
        Self {
            total,
            collaborators,
        }
    }
}
