//! Data models for the address book.
//!
//! This module contains the data structures representing the persons
//! stored in the address book file.

pub mod person;

pub use person::Person;
