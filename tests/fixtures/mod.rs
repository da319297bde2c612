//! Sample persons shared by the integration tests.

#![allow(dead_code)]

use addressbook::models::Person;

/// Create a person from raw field values, panicking on invalid input.
pub fn person(name: &str, phone: &str, email: &str, address: &str) -> Person {
    Person::parse(name, phone, email, address).expect("fixture person should be valid")
}

pub fn alice() -> Person {
    person("Alice Tan", "91234567", "alice@x.com", "1 Main St")
}

pub fn bob() -> Person {
    person("Bob Lee", "98765432", "bob@x.com", "2 Main St")
}

/// A small address book with persons matching on different fields.
pub fn sample_book() -> Vec<Person> {
    vec![
        alice(),
        bob(),
        person("Carol Ng", "87654321", "carol@school.edu", "Blk 30 Geylang Street 29"),
        person("David Li", "65432100", "dli@corp.com", "Tampines Ave 4"),
    ]
}

/// The JSON file form of `sample_book`.
pub fn sample_book_json() -> String {
    serde_json::json!({ "persons": sample_book() }).to_string()
}
