//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is invalid.
    InvalidName(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided address is invalid.
    InvalidAddress(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(
                f,
                "Invalid name: {:?} (names should only contain letters, digits and spaces)",
                name
            ),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: {:?} (phone numbers should only contain digits)",
                phone
            ),
            Self::InvalidEmail(email) => write!(
                f,
                "Invalid email address: {:?} (emails should look like user@domain)",
                email
            ),
            Self::InvalidAddress(address) => {
                write!(f, "Invalid address: {:?} (addresses cannot be blank)", address)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
