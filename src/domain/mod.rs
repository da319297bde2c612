//! Domain value objects and types.
//!
//! Type-safe wrappers for the four fields of a person: name, phone,
//! email and address. Each validates at construction time, so a loaded
//! address book never holds malformed values.

pub mod address;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use address::Address;
pub use email::Email;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::Phone;
