//! Person service layer.
//!
//! Loads address book snapshots (through a TTL cache) and runs commands
//! against them.

use crate::cache::SnapshotCache;
use crate::commands::{Command, CommandResult, FindCommand, ListCommand};
use crate::error::{ServiceResult, StorageResult};
use crate::matching::KeywordSet;
use crate::models::Person;
use crate::repositories::PersonRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Person service trait for address book operations.
#[async_trait]
pub trait PersonService: Send + Sync {
    /// Find persons matching any of the keywords.
    async fn find(&self, keywords: KeywordSet) -> ServiceResult<CommandResult>;

    /// List every person.
    async fn list(&self) -> ServiceResult<CommandResult>;

    /// Parse and run raw command text such as `find alice bob`.
    async fn execute(&self, input: &str) -> ServiceResult<CommandResult>;

    /// Forget the cached snapshot so the next command reloads storage.
    fn invalidate_cache(&self);
}

/// Default implementation of PersonService.
pub struct PersonServiceImpl {
    person_repo: Arc<dyn PersonRepository>,
    snapshot_cache: SnapshotCache<Arc<Vec<Person>>>,
}

impl PersonServiceImpl {
    /// Create a new person service.
    ///
    /// # Arguments
    /// * `person_repo` - Where the address book is loaded from
    /// * `cache_ttl_secs` - How long a loaded snapshot is reused (0 disables caching)
    pub fn new(person_repo: Arc<dyn PersonRepository>, cache_ttl_secs: u64) -> Self {
        Self {
            person_repo,
            snapshot_cache: SnapshotCache::new(cache_ttl_secs),
        }
    }

    /// The current address book snapshot, loading it if the cache is cold.
    async fn snapshot(&self) -> StorageResult<Arc<Vec<Person>>> {
        if let Some(persons) = self.snapshot_cache.get() {
            tracing::debug!("Using cached address book ({} persons)", persons.len());
            return Ok(persons);
        }

        let persons = Arc::new(self.person_repo.all_persons().await?);
        self.snapshot_cache.insert(persons.clone());
        Ok(persons)
    }

    async fn run(&self, command: Command) -> ServiceResult<CommandResult> {
        let persons = self.snapshot().await?;
        let result = command.execute(&persons);
        tracing::info!("{:?} -> {}", command, result.feedback_to_user);
        Ok(result)
    }
}

#[async_trait]
impl PersonService for PersonServiceImpl {
    async fn find(&self, keywords: KeywordSet) -> ServiceResult<CommandResult> {
        self.run(Command::Find(FindCommand::new(keywords))).await
    }

    async fn list(&self) -> ServiceResult<CommandResult> {
        self.run(Command::List(ListCommand)).await
    }

    async fn execute(&self, input: &str) -> ServiceResult<CommandResult> {
        let command = Command::parse(input).map_err(|e| {
            tracing::warn!("Rejected command {:?}: {}", input, e);
            e
        })?;
        self.run(command).await
    }

    fn invalidate_cache(&self) {
        self.snapshot_cache.invalidate();
    }
}
