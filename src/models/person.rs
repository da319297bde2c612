//! Person model representing one entry of the address book.

use crate::domain::{Address, Email, Name, Phone, ValidationError};
use crate::matching::Searchable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person in the address book.
///
/// Field values are validated on construction and on deserialization, so a
/// `Person` read from disk is always well formed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Person {
    /// Full name
    pub name: Name,

    /// Phone number (digits only)
    pub phone: Phone,

    /// Email address
    pub email: Email,

    /// Postal address
    pub address: Address,
}

impl Person {
    /// Create a person from already validated fields.
    pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Self {
            name,
            phone,
            email,
            address,
        }
    }

    /// Create a person from raw strings, validating every field.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first invalid field.
    pub fn parse(
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            Name::new(name)?,
            Phone::new(phone)?,
            Email::new(email)?,
            Address::new(address)?,
        ))
    }
}

impl Searchable for Person {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = self.name.words();
        fields.push(self.phone.as_str());
        fields.push(self.email.as_str());
        fields.extend(self.address.words());
        fields
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {}",
            self.name, self.phone, self.email, self.address
        )
    }
}
