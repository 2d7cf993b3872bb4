//! MCP server implementation for the todo store
//!
//! This module defines the main MCP server that exposes todo operations as
//! tools. Handler implementations are in the handlers module.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError,
};

use crate::handlers;
use crate::params::*;
use crate::repository::TodoRepository;

/// The main Todo MCP server
#[derive(Clone)]
pub struct TodoMcpServer {
    repository: TodoRepository,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TodoMcpServer {
    pub fn new(repository: TodoRepository) -> Self {
        Self {
            repository,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Fetches all completed todos")]
    async fn completed_todos(&self) -> Result<CallToolResult, McpError> {
        handlers::completed_todos(&self.repository).await
    }

    #[tool(description = "Fetches all pending todos")]
    async fn pending_todos(&self) -> Result<CallToolResult, McpError> {
        handlers::pending_todos(&self.repository).await
    }

    #[tool(description = "Creates a new todo")]
    async fn create_todo(
        &self,
        Parameters(params): Parameters<CreateTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::create_todo(&self.repository, params).await
    }

    #[tool(description = "Gets a specific todo by ID")]
    async fn get_todo(
        &self,
        Parameters(params): Parameters<GetTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_todo(&self.repository, params).await
    }

    #[tool(description = "Marks a specific todo as completed")]
    async fn complete_todo(
        &self,
        Parameters(params): Parameters<CompleteTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::complete_todo(&self.repository, params).await
    }

    #[tool(description = "Deletes a specific todo by ID")]
    async fn delete_todo(
        &self,
        Parameters(params): Parameters<DeleteTodoParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::delete_todo(&self.repository, params).await
    }

    #[tool(description = "Deletes all todos")]
    async fn delete_all_todos(&self) -> Result<CallToolResult, McpError> {
        handlers::delete_all_todos(&self.repository).await
    }
}

#[tool_handler]
impl rmcp::ServerHandler for TodoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Todo MCP server. Create todos, list them by pending/completed status, \
                 fetch or complete a todo by ID, and delete one or all todos."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
