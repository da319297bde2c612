mod json_file_repository;
mod traits;

pub use json_file_repository::{AddressBookFile, JsonFilePersonRepository};
pub use traits::PersonRepository;
