//! Distinct states of adults living in large cities

use rollup_model::Person;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Thresholds for [`PersonService::states`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateFilter {
    /// Minimum age, inclusive
    pub min_age: u32,
    /// Minimum city population, inclusive
    pub min_population: u64,
}

impl StateFilter {
    /// Default minimum age
    pub const DEFAULT_MIN_AGE: u32 = 18;

    /// Default minimum city population
    pub const DEFAULT_MIN_POPULATION: u64 = 100_000;

    /// Create filter with default thresholds
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_age: Self::DEFAULT_MIN_AGE,
            min_population: Self::DEFAULT_MIN_POPULATION,
        }
    }

    /// Set minimum age
    #[inline]
    #[must_use]
    pub fn with_min_age(mut self, min_age: u32) -> Self {
        self.min_age = min_age;
        self
    }

    /// Set minimum population
    #[inline]
    #[must_use]
    pub fn with_min_population(mut self, min_population: u64) -> Self {
        self.min_population = min_population;
        self
    }

    /// Whether `person` passes both thresholds
    #[must_use]
    pub fn accepts(&self, person: &Person) -> bool {
        let old_enough = person.age.is_some_and(|age| age >= self.min_age);
        let big_city = person
            .address
            .as_ref()
            .and_then(|a| a.city.population)
            .is_some_and(|p| p >= self.min_population);
        old_enough && big_city
    }
}

impl Default for StateFilter {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists states of the people that pass a [`StateFilter`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonService;

impl PersonService {
    /// Create person service
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Distinct state names, ascending
    ///
    /// People with an unknown age, address or population never match.
    /// Absent input yields an empty list.
    #[must_use]
    pub fn states(&self, persons: Option<&[Person]>, filter: &StateFilter) -> Vec<String> {
        let Some(persons) = persons else {
            tracing::debug!("no persons supplied");
            return Vec::new();
        };

        let states: BTreeSet<&str> = persons
            .iter()
            .filter(|p| filter.accepts(p))
            .filter_map(Person::state)
            .map(|s| s.name.as_str())
            .collect();
        tracing::debug!(persons = persons.len(), states = states.len(), "listed states");

        states.into_iter().map(str::to_owned).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollup_test_utils::{person, person_without_details};

    #[test]
    fn default_thresholds() {
        let f = StateFilter::default();
        assert_eq!(f.min_age, 18);
        assert_eq!(f.min_population, 100_000);
    }

    #[test]
    fn thresholds_are_inclusive() {
        let f = StateFilter::new();
        assert!(f.accepts(&person("a", 18, "c", 100_000, "SC")));
        assert!(!f.accepts(&person("a", 17, "c", 100_000, "SC")));
        assert!(!f.accepts(&person("a", 18, "c", 99_999, "SC")));
    }

    #[test]
    fn missing_details_never_match() {
        assert!(!StateFilter::new().accepts(&person_without_details("André Justi")));
    }

    #[test]
    fn filter_deserializes_with_defaults() {
        let f: StateFilter = serde_json::from_str(r#"{"min_age": 21}"#).unwrap();
        assert_eq!(f, StateFilter::new().with_min_age(21));
    }
}
