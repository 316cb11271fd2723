//! Employees and offices joined on company id

use crate::record::{Keyed, Named};
use serde::{Deserialize, Serialize};

/// Person employed by a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    company_id: Option<String>,
}

impl Employee {
    /// Create employee
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, company_id: Option<String>) -> Self {
        Self {
            name: name.into(),
            company_id,
        }
    }

    /// Create employee of `company_id`
    #[inline]
    #[must_use]
    pub fn of(name: impl Into<String>, company_id: impl Into<String>) -> Self {
        Self::new(name, Some(company_id.into()))
    }

    /// Company id, if known
    #[inline]
    #[must_use]
    pub fn company_id(&self) -> Option<&str> {
        self.company_id.as_deref()
    }
}

impl Keyed for Employee {
    fn group_key(&self) -> Option<&str> {
        self.company_id()
    }
}

impl Named for Employee {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Physical office of a company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    name: String,
    company_id: Option<String>,
}

impl Office {
    /// Create office
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, company_id: Option<String>) -> Self {
        Self {
            name: name.into(),
            company_id,
        }
    }

    /// Create office of `company_id`
    #[inline]
    #[must_use]
    pub fn of(name: impl Into<String>, company_id: impl Into<String>) -> Self {
        Self::new(name, Some(company_id.into()))
    }

    /// Company id, if known
    #[inline]
    #[must_use]
    pub fn company_id(&self) -> Option<&str> {
        self.company_id.as_deref()
    }
}

impl Keyed for Office {
    fn group_key(&self) -> Option<&str> {
        self.company_id()
    }
}

impl Named for Office {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Company merged from its employees and offices
///
/// A side with no matching records is `None`, never an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Company id shared by both sides
    pub company_id: String,

    /// Employee names, ascending
    pub collaborators: Option<Vec<String>>,

    /// Office names, ascending
    pub offices: Option<Vec<String>>,
}

impl Company {
    /// Create company
    #[inline]
    #[must_use]
    pub fn new(
        company_id: impl Into<String>,
        collaborators: Option<Vec<String>>,
        offices: Option<Vec<String>>,
    ) -> Self {
        Self {
            company_id: company_id.into(),
            collaborators,
            offices,
        }
    }
}
