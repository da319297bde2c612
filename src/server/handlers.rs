//! MCP tool handlers for the address book server.
//!
//! This module implements the MCP tools using the rmcp SDK's tool_router pattern.

use crate::commands::CommandResult;
use crate::error::ServiceError;
use crate::matching::KeywordSet;
use crate::services::PersonService;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The MCP server that exposes the address book commands.
#[derive(Clone)]
pub struct AddressBookMcpServer {
    person_service: Arc<dyn PersonService>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for AddressBookMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "addressbook-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for a personal address book - finds persons by keyword across names, phones, emails and addresses.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FindPersonsParams {
    /// Keywords to look for; any one of them is enough for a person to match
    keywords: Vec<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ExecuteCommandParams {
    /// Raw command text, e.g. "find alice bob" or "list"
    command: String,
}

fn to_mcp_error(e: ServiceError) -> McpError {
    let code = match e {
        ServiceError::Command(_) => ErrorCode::INVALID_PARAMS,
        ServiceError::Storage(_) => ErrorCode::INTERNAL_ERROR,
    };
    McpError {
        code,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

fn serialization_error(e: serde_json::Error) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// JSON body shared by the listing tools.
fn listing_json(result: &CommandResult) -> serde_json::Value {
    let persons = result.relevant_persons.as_deref().unwrap_or_default();
    serde_json::json!({
        "message": result.feedback_to_user,
        "count": persons.len(),
        "persons": persons,
    })
}

fn listing_response(result: &CommandResult) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(&listing_json(result)).map_err(serialization_error)?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl AddressBookMcpServer {
    /// Create a new address book MCP server.
    pub fn new(person_service: Arc<dyn PersonService>) -> Self {
        Self {
            person_service,
            tool_router: Self::tool_router(),
        }
    }

    /// Find persons whose name, phone, email or address contains any keyword.
    #[tool(
        description = "Find all persons whose name, phone, email or address contains any of the keywords (case-insensitive substring match). Returns the matching persons and a count message."
    )]
    async fn find_persons(
        &self,
        params: Parameters<FindPersonsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: find_persons called");
        tracing::debug!("Parameters: keywords={:?}", params.keywords);

        let result = self
            .person_service
            .find(KeywordSet::new(&params.keywords))
            .await
            .map_err(to_mcp_error)?;

        listing_response(&result)
    }

    /// List every person in the address book.
    #[tool(description = "List every person in the address book with a count message.")]
    async fn list_persons(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("MCP Handler: list_persons called");

        let result = self.person_service.list().await.map_err(to_mcp_error)?;

        listing_response(&result)
    }

    /// Run a raw address book command and return its rendered text.
    #[tool(
        description = "Run an address book command such as 'find alice bob' or 'list' and return the numbered listing followed by the result message."
    )]
    async fn execute_command(
        &self,
        params: Parameters<ExecuteCommandParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        tracing::info!("MCP Handler: execute_command called");
        tracing::debug!("Parameters: command={:?}", params.command);

        let result = self
            .person_service
            .execute(&params.command)
            .await
            .map_err(|e| {
                tracing::error!("Command failed: {:?}", e);
                to_mcp_error(e)
            })?;

        Ok(CallToolResult::success(vec![Content::text(result.render())]))
    }
}
