//! People with nested address data

use serde::{Deserialize, Serialize};

/// Federal state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    /// State name or code
    pub name: String,
}

impl State {
    /// Create state
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// City with optional population count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// City name
    pub name: String,
    /// Population, if known
    pub population: Option<u64>,
    /// State the city belongs to
    pub state: State,
}

impl City {
    /// Create city
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, population: Option<u64>, state: State) -> Self {
        Self {
            name: name.into(),
            population,
            state,
        }
    }
}

/// Street address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street name
    pub street: String,
    /// City of the street
    pub city: City,
}

impl Address {
    /// Create address
    #[inline]
    #[must_use]
    pub fn new(street: impl Into<String>, city: City) -> Self {
        Self {
            street: street.into(),
            city,
        }
    }
}

/// Person with optional age and address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Full name
    pub name: String,
    /// Age in years, if known
    pub age: Option<u32>,
    /// Home address, if known
    pub address: Option<Address>,
}

impl Person {
    /// Create person
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, age: Option<u32>, address: Option<Address>) -> Self {
        Self {
            name: name.into(),
            age,
            address,
        }
    }

    /// State of residence, if the address is known
    #[inline]
    #[must_use]
    pub fn state(&self) -> Option<&State> {
        self.address.as_ref().map(|a| &a.city.state)
    }
}
