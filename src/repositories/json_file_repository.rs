use crate::error::{StorageError, StorageResult};
use crate::models::Person;
use crate::repositories::traits::PersonRepository;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// On-disk layout of the address book file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressBookFile {
    #[serde(default)]
    pub persons: Vec<Person>,
}

/// Person repository backed by a JSON file.
///
/// The file is read on every call; callers that want to reuse a loaded
/// address book put a cache in front of it.
pub struct JsonFilePersonRepository {
    path: PathBuf,
}

impl JsonFilePersonRepository {
    /// Create a new JsonFilePersonRepository for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait]
impl PersonRepository for JsonFilePersonRepository {
    async fn all_persons(&self) -> StorageResult<Vec<Person>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("Address book {} not found, starting empty", self.display_path());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.display_path(),
                    source,
                })
            }
        };

        let file: AddressBookFile =
            serde_json::from_str(&raw).map_err(|source| StorageError::Parse {
                path: self.display_path(),
                source,
            })?;

        tracing::debug!(
            "Loaded {} persons from {}",
            file.persons.len(),
            self.display_path()
        );
        Ok(file.persons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_book(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_loads_persons() {
        let file = write_book(
            r#"{"persons": [
                {"name": "Alice Tan", "phone": "91234567", "email": "alice@x.com", "address": "1 Main St"},
                {"name": "Bob Lee", "phone": "98765432", "email": "bob@x.com", "address": "2 Main St"}
            ]}"#,
        );

        let repo = JsonFilePersonRepository::new(file.path());
        let persons = repo.all_persons().await.unwrap();
        assert_eq!(persons.len(), 2);
        assert_eq!(persons[1].name.as_str(), "Bob Lee");
    }

    #[tokio::test]
    async fn test_missing_file_is_empty_book() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFilePersonRepository::new(dir.path().join("missing.json"));
        assert!(repo.all_persons().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_document_is_empty_book() {
        let file = write_book("{}");
        let repo = JsonFilePersonRepository::new(file.path());
        assert!(repo.all_persons().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_value_is_parse_error() {
        let file = write_book(
            r#"{"persons": [{"name": "Alice", "phone": "91234567", "email": "nope", "address": "1 Main St"}]}"#,
        );
        let repo = JsonFilePersonRepository::new(file.path());

        match repo.all_persons().await {
            Err(StorageError::Parse { source, .. }) => {
                assert!(source.to_string().contains("Invalid email address"))
            }
            other => panic!("Expected Parse error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFilePersonRepository::new(dir.path());
        assert!(matches!(
            repo.all_persons().await,
            Err(StorageError::Io { .. })
        ));
    }
}
