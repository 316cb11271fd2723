//! Bundled datasets

use rollup_model::{Address, City, Collaborator, Collaborators, Employee, Office, Person, State};

pub(crate) fn collaborators() -> Collaborators {
    Collaborators::new(vec![
        Collaborator::in_sector("André Justi", 500_000.0, "XTW04"),
        Collaborator::in_sector("Paulo Gustavo", 100_000.0, "TTW01"),
        Collaborator::in_sector("Wellington Macedo", 300_000.0, "XTW04"),
        Collaborator::in_sector("Maycow Antunes", 300_000.0, "TTW01"),
    ])
}

pub(crate) fn employees() -> Vec<Employee> {
    vec![
        Employee::of("Maycow Antunes", "Meli"),
        Employee::of("Wellington Macedo", "Meli"),
        Employee::of("Paulo Gustavo", "Meli Envios"),
    ]
}

pub(crate) fn offices() -> Vec<Office> {
    vec![Office::of("Meli Floripa", "Meli"), Office::of("Meli Cidade", "Meli")]
}

fn resident(name: &str, age: u32, street: &str, city: &str, population: u64, state: &str) -> Person {
    Person::new(
        name,
        Some(age),
        Some(Address::new(street, City::new(city, Some(population), State::new(state)))),
    )
}

pub(crate) fn people() -> Vec<Person> {
    vec![
        resident("André Justi", 28, "Padre Chagas", "Florianópolis", 100_001, "SC"),
        resident("Wellington Macedo", 19, "Miguel Dutra", "Palhoça", 99_999, "SC"),
        resident("Paulo Gustavo", 19, "Jose Angelo Peti", "Druta", 99_999, "SP"),
        resident("Maycow Antunes", 19, "Dona Ema", "Rio Negrinho", 100_001, "RJ"),
        Person::new("Anonymous", None, None),
    ]
}
