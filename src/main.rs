//! Address Book MCP Server - Main entry point
//!
//! Serves a JSON address book over the Model Context Protocol (MCP) on stdio.

use addressbook::repositories::{JsonFilePersonRepository, PersonRepository};
use addressbook::services::{PersonService, PersonServiceImpl};
use addressbook::{AddressBookMcpServer, Config};
use anyhow::Result;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Logging goes to stderr only; stdout carries MCP traffic
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Starting Address Book MCP Server with address book: {}",
        config.addressbook_file.display()
    );

    let person_repo = Arc::new(JsonFilePersonRepository::new(&config.addressbook_file))
        as Arc<dyn PersonRepository>;

    // Fail fast on an unreadable or malformed address book
    match person_repo.all_persons().await {
        Ok(persons) => info!("Address book holds {} persons", persons.len()),
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    }

    let person_service = Arc::new(PersonServiceImpl::new(
        person_repo,
        config.cache_ttl_seconds,
    )) as Arc<dyn PersonService>;

    let server = AddressBookMcpServer::new(person_service);
    info!("Snapshot cache TTL: {} seconds", config.cache_ttl_seconds);

    info!("Starting MCP server with stdio transport");
    addressbook::server::run_server(server).await?;

    info!("Address Book MCP Server shutdown complete");
    Ok(())
}
