//! Testing utilities for Rollup workspace
//!
//! Shared fixtures, sample datasets and proptest strategies.

#![allow(missing_docs)]

use proptest::prelude::*;
use rollup_model::{Address, City, Collaborator, Employee, Office, Person, Sector, State};

pub const SECTORS: [&str; 3] = ["TTW01", "XTW04", "ZQA09"];
pub const COMPANIES: [&str; 4] = ["Meli", "Meli Envios", "Meli Pago", "Acme"];

pub fn collaborator(name: &str, salary: f64, sector: &str) -> Collaborator {
    Collaborator::in_sector(name, salary, sector)
}

pub fn collaborator_without_salary(name: &str, sector: &str) -> Collaborator {
    Collaborator::new(name, None, Some(Sector::new(sector)))
}

pub fn collaborator_without_sector(name: &str, salary: f64) -> Collaborator {
    Collaborator::new(name, Some(salary), None)
}

pub fn employee(name: &str, company_id: &str) -> Employee {
    Employee::of(name, company_id)
}

pub fn office(name: &str, company_id: &str) -> Office {
    Office::of(name, company_id)
}

pub fn person(name: &str, age: u32, city: &str, population: u64, state: &str) -> Person {
    Person::new(
        name,
        Some(age),
        Some(Address::new(
            "Rua Principal",
            City::new(city, Some(population), State::new(state)),
        )),
    )
}

pub fn person_without_details(name: &str) -> Person {
    Person::new(name, None, None)
}

/// Salary records from the four-person sector scenario
pub fn sample_collaborators() -> Vec<Collaborator> {
    vec![
        collaborator("André Justi", 500_000.0, "XTW04"),
        collaborator("Paulo Gustavo", 100_000.0, "TTW01"),
        collaborator("Wellington Macedo", 300_000.0, "XTW04"),
        collaborator("Maycow Antunes", 300_000.0, "TTW01"),
    ]
}

/// Employees from the two-company join scenario
pub fn sample_employees() -> Vec<Employee> {
    vec![
        employee("Maycow Antunes", "Meli"),
        employee("Wellington Macedo", "Meli"),
        employee("Paulo Gustavo", "Meli Envios"),
    ]
}

/// Offices from the two-company join scenario
pub fn sample_offices() -> Vec<Office> {
    vec![office("Meli Floripa", "Meli"), office("Meli Cidade", "Meli")]
}

/// People from the state filter scenario
pub fn sample_people() -> Vec<Person> {
    vec![
        person("André Justi", 28, "Florianópolis", 100_001, "SC"),
        person("Wellington Macedo", 19, "Palhoça", 99_999, "SC"),
        person("Paulo Gustavo", 19, "Druta", 99_999, "SP"),
        person("Maycow Antunes", 19, "Rio Negrinho", 100_001, "RJ"),
    ]
}

/// Valid salary records: whole-unit salaries so sums are exact
pub fn valid_collaborators() -> impl Strategy<Value = Vec<Collaborator>> {
    proptest::collection::vec(
        ("[a-z]{1,8}", 0u32..1_000_000, proptest::sample::select(SECTORS.to_vec())),
        0..40,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(name, salary, sector)| collaborator(&name, f64::from(salary), sector))
            .collect::<Vec<_>>()
    })
}

/// Valid employees keyed by a small company pool
pub fn valid_employees() -> impl Strategy<Value = Vec<Employee>> {
    proptest::collection::vec(
        ("[A-Z][a-z]{1,8}", proptest::sample::select(COMPANIES.to_vec())),
        0..30,
    )
    .prop_map(|rows| rows.into_iter().map(|(n, c)| employee(&n, c)).collect::<Vec<_>>())
}

/// Valid offices keyed by a small company pool
pub fn valid_offices() -> impl Strategy<Value = Vec<Office>> {
    proptest::collection::vec(
        ("Office [a-z]{1,6}", proptest::sample::select(COMPANIES.to_vec())),
        0..30,
    )
    .prop_map(|rows| rows.into_iter().map(|(n, c)| office(&n, c)).collect::<Vec<_>>())
}
