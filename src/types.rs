//! Type definitions for todo-mcp

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single todo record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub completed: bool,
    pub created_at: String,
}

impl Todo {
    /// Render one todo as the markdown block returned in tool responses.
    pub fn render(&self) -> String {
        format!(
            "\n\n- **ID**: {}\n- **Title**: {}\n- **Completed**: {}\n- **Created At**: {}",
            self.id, self.title, self.completed, self.created_at
        )
    }
}

/// Render a numbered list of todos under a header, or the empty message
/// when there is nothing to list.
pub fn render_list(header: &str, empty_message: &str, todos: &[Todo]) -> String {
    if todos.is_empty() {
        return empty_message.to_string();
    }

    let mut out = format!("{}\n", header);
    for (i, todo) in todos.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, todo.render()));
    }
    out
}
