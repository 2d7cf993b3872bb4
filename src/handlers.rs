//! Handler implementations for todo-mcp tools
//!
//! Each handler validates its arguments, calls the repository, and formats a
//! text response. Failures of any kind come back as an error result payload
//! on the call itself, never as a protocol error; a failed call leaves the
//! server and other in-flight calls untouched.

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};

use crate::error::TodoError;
use crate::params::*;
use crate::repository::TodoRepository;
use crate::types::render_list;

fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

fn error_result(err: TodoError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(err.to_string())])
}

/// Ids arrive as strings on the wire.
fn parse_id(raw: &str) -> Result<i64, TodoError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|e| TodoError::Validation(format!("invalid id {:?}: {}", raw, e)))
}

pub async fn completed_todos(repo: &TodoRepository) -> Result<CallToolResult, McpError> {
    match repo.list_completed() {
        Ok(todos) => Ok(text_success(render_list(
            "Completed Todos:",
            "No completed todos found.",
            &todos,
        ))),
        Err(e) => Ok(error_result(e)),
    }
}

pub async fn pending_todos(repo: &TodoRepository) -> Result<CallToolResult, McpError> {
    match repo.list_pending() {
        Ok(todos) => Ok(text_success(render_list(
            "Pending Todos:",
            "No pending todos found.",
            &todos,
        ))),
        Err(e) => Ok(error_result(e)),
    }
}

pub async fn create_todo(
    repo: &TodoRepository,
    params: CreateTodoParams,
) -> Result<CallToolResult, McpError> {
    if params.title.trim().is_empty() {
        return Ok(error_result(TodoError::Validation(
            "title must not be empty".to_string(),
        )));
    }

    match repo.create(&params.title) {
        Ok(todo) => Ok(text_success(format!("Created todo: {}", todo.render()))),
        Err(e) => Ok(error_result(e)),
    }
}

pub async fn get_todo(
    repo: &TodoRepository,
    params: GetTodoParams,
) -> Result<CallToolResult, McpError> {
    let id = match parse_id(&params.id) {
        Ok(id) => id,
        Err(e) => return Ok(error_result(e)),
    };

    match repo.get(id) {
        Ok(todo) => Ok(text_success(format!("Todo: {}", todo.render()))),
        Err(e) => Ok(error_result(e)),
    }
}

pub async fn complete_todo(
    repo: &TodoRepository,
    params: CompleteTodoParams,
) -> Result<CallToolResult, McpError> {
    let id = match parse_id(&params.id) {
        Ok(id) => id,
        Err(e) => return Ok(error_result(e)),
    };

    match repo.complete(id) {
        Ok(todo) => Ok(text_success(format!("Completed todo: {}", todo.render()))),
        Err(e) => Ok(error_result(e)),
    }
}

pub async fn delete_todo(
    repo: &TodoRepository,
    params: DeleteTodoParams,
) -> Result<CallToolResult, McpError> {
    let id = match parse_id(&params.id) {
        Ok(id) => id,
        Err(e) => return Ok(error_result(e)),
    };

    match repo.delete(id) {
        Ok(()) => Ok(text_success(format!("Deleted todo with ID: {}", id))),
        Err(e) => Ok(error_result(e)),
    }
}

pub async fn delete_all_todos(repo: &TodoRepository) -> Result<CallToolResult, McpError> {
    match repo.delete_all() {
        Ok(()) => Ok(text_success("Deleted all todos")),
        Err(e) => Ok(error_result(e)),
    }
}
