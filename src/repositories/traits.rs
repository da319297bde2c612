use crate::error::StorageResult;
use crate::models::Person;
use async_trait::async_trait;

/// Read access to the persons of an address book.
///
/// Provides abstraction over where the address book lives,
/// enabling different implementations (JSON file, in-memory mock).
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Retrieve every person in the address book.
    async fn all_persons(&self) -> StorageResult<Vec<Person>>;
}
