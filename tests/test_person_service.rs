//! Integration tests for the person service against an in-memory repository.

use addressbook::error::{CommandError, ServiceError, StorageError};
use addressbook::matching::KeywordSet;
use addressbook::services::{PersonService, PersonServiceImpl};
use std::sync::Arc;

mod fixtures;
mod mocks;
use fixtures::*;
use mocks::MockPersonRepository;

fn service_with(repo: &MockPersonRepository, ttl: u64) -> PersonServiceImpl {
    PersonServiceImpl::new(Arc::new(repo.clone()), ttl)
}

#[tokio::test]
async fn test_find_returns_matches_and_count() {
    let repo = MockPersonRepository::new();
    repo.add_persons(vec![alice(), bob()]);
    let service = service_with(&repo, 60);

    let result = service
        .find(KeywordSet::new(["alice", "main"]))
        .await
        .unwrap();

    assert_eq!(result.feedback_to_user, "2 persons listed!");
    assert_eq!(result.relevant_persons, Some(vec![alice(), bob()]));
}

#[tokio::test]
async fn test_find_on_empty_book() {
    let repo = MockPersonRepository::new();
    let service = service_with(&repo, 60);

    let result = service.find(KeywordSet::new(["alice"])).await.unwrap();
    assert_eq!(result.feedback_to_user, "0 persons listed!");
    assert_eq!(result.relevant_persons, Some(Vec::new()));
}

#[tokio::test]
async fn test_execute_find_renders_listing() {
    let repo = MockPersonRepository::new();
    repo.add_persons(sample_book());
    let service = service_with(&repo, 60);

    let result = service.execute("find 98765 SCHOOL").await.unwrap();
    assert_eq!(
        result.render(),
        "1. Bob Lee Phone: 98765432 Email: bob@x.com Address: 2 Main St\n\
         2. Carol Ng Phone: 87654321 Email: carol@school.edu Address: Blk 30 Geylang Street 29\n\
         2 persons listed!"
    );
}

#[tokio::test]
async fn test_execute_list() {
    let repo = MockPersonRepository::new();
    repo.add_persons(sample_book());
    let service = service_with(&repo, 60);

    let result = service.execute("list").await.unwrap();
    assert_eq!(result.feedback_to_user, "4 persons listed!");
}

#[tokio::test]
async fn test_execute_invalid_commands() {
    let repo = MockPersonRepository::new();
    let service = service_with(&repo, 60);

    match service.execute("find   ").await {
        Err(ServiceError::Command(CommandError::InvalidFormat { usage })) => {
            assert!(usage.contains("Example: find alice bob charlie"))
        }
        other => panic!("Expected InvalidFormat, got: {:?}", other),
    }

    assert!(matches!(
        service.execute("add John").await,
        Err(ServiceError::Command(CommandError::UnknownCommand(_)))
    ));
    assert_eq!(repo.get_call_count("all_persons"), 0);
}

#[tokio::test]
async fn test_cache_reuses_snapshot_until_invalidated() {
    let repo = MockPersonRepository::new();
    repo.add_person(alice());
    let service = service_with(&repo, 60);

    assert_eq!(service.list().await.unwrap().feedback_to_user, "1 persons listed!");

    // Changes in storage are not seen while the snapshot is fresh
    repo.add_person(bob());
    assert_eq!(service.list().await.unwrap().feedback_to_user, "1 persons listed!");
    assert_eq!(repo.get_call_count("all_persons"), 1);

    service.invalidate_cache();
    assert_eq!(service.list().await.unwrap().feedback_to_user, "2 persons listed!");
    assert_eq!(repo.get_call_count("all_persons"), 2);
}

#[tokio::test]
async fn test_storage_failure_surfaces() {
    let repo = MockPersonRepository::new();
    repo.fail_loads("disk on fire");
    let service = service_with(&repo, 60);

    match service.find(KeywordSet::new(["alice"])).await {
        Err(ServiceError::Storage(StorageError::Io { source, .. })) => {
            assert_eq!(source.to_string(), "disk on fire")
        }
        other => panic!("Expected storage error, got: {:?}", other),
    }
}
