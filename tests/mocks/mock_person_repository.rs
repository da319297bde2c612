use addressbook::error::{StorageError, StorageResult};
use addressbook::models::Person;
use addressbook::repositories::PersonRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock person repository for testing.
///
/// Provides an in-memory implementation of PersonRepository that can be
/// easily configured with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockPersonRepository {
    persons: Arc<Mutex<Vec<Person>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

#[allow(dead_code)]
impl MockPersonRepository {
    /// Create a new empty MockPersonRepository.
    pub fn new() -> Self {
        Self {
            persons: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            fail_with: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a person to the mock repository.
    pub fn add_person(&self, person: Person) {
        self.persons.lock().unwrap().push(person);
    }

    /// Add multiple persons to the mock repository.
    pub fn add_persons(&self, persons: Vec<Person>) {
        self.persons.lock().unwrap().extend(persons);
    }

    /// Make every subsequent load fail with an io error carrying `message`.
    pub fn fail_loads(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Clear all persons from the repository.
    pub fn clear(&self) {
        self.persons.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockPersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PersonRepository for MockPersonRepository {
    async fn all_persons(&self) -> StorageResult<Vec<Person>> {
        self.track_call("all_persons");

        let failure = self.fail_with.lock().unwrap().clone();
        if let Some(message) = failure {
            return Err(StorageError::Io {
                path: "mock".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::Other, message),
            });
        }

        Ok(self.persons.lock().unwrap().clone())
    }
}
