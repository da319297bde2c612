mod mock_person_repository;

#[allow(unused_imports)]
pub use mock_person_repository::MockPersonRepository;
