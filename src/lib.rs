//! Todo MCP Library
//!
//! A minimal todo store exposed as MCP tools over a SQLite-backed repository.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use todo_mcp::{TodoMcpServer, TodoRepository};
//!
//! let repository = TodoRepository::in_memory()?;
//! let server = TodoMcpServer::new(repository);
//! // Serve via streamable HTTP or an in-process transport
//! ```

pub mod error;
pub mod handlers;
pub mod params;
pub mod repository;
pub mod schema;
pub mod server;
pub mod types;

// Re-export main types
pub use error::TodoError;
pub use repository::TodoRepository;
pub use server::TodoMcpServer;

// Re-export parameter types for direct API usage
pub use params::*;
