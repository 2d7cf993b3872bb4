//! Parameter definitions for todo-mcp tools
//!
//! One struct per tool that takes arguments. The list and delete-all tools
//! take none. Ids arrive as strings on the wire and are parsed to integers
//! in the handlers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTodoParams {
    /// The title of the todo
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetTodoParams {
    /// The ID of the todo to retrieve
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CompleteTodoParams {
    /// The ID of the todo to complete
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DeleteTodoParams {
    /// The ID of the todo to delete
    pub id: String,
}
