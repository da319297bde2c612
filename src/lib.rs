//! Address Book MCP Server - a personal address book exposed over the Model Context Protocol.
//!
//! The heart of the crate is keyword search: given a set of keywords, find every
//! person whose name, phone, email or address contains any keyword, ignoring case.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones, emails and addresses
//! - **models**: The `Person` record
//! - **matching**: Keyword normalization and the substring matcher
//! - **commands**: Parsing and running `find` / `list`
//! - **repositories**: Loading persons from a JSON file
//! - **cache**: TTL cache for the loaded address book
//! - **services**: Business logic tying storage, cache and commands together
//! - **server**: MCP protocol server
//! - **config** / **error**: Environment configuration and error types

pub mod cache;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;

pub use cache::SnapshotCache;
pub use commands::{Command, CommandResult, FindCommand, ListCommand};
pub use config::Config;
pub use error::{CommandError, ConfigError, ServiceError, StorageError};
pub use matching::{KeywordMatcher, KeywordSet, Searchable};
pub use models::Person;
pub use repositories::{JsonFilePersonRepository, PersonRepository};
pub use server::AddressBookMcpServer;
pub use services::{PersonService, PersonServiceImpl};
