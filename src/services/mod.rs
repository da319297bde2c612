//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! repositories and commands. They provide a clean boundary between the
//! MCP handlers and the data access layer.

mod person_service;

pub use person_service::{PersonService, PersonServiceImpl};
