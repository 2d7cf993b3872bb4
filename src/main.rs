//! Todo MCP - minimal todo store served as MCP tools over streamable HTTP
//!
//! Storage is a single SQLite table, in-memory by default.

use anyhow::Context;
use clap::Parser;
use rmcp::transport::streamable_http_server::{
    session::local::LocalSessionManager, StreamableHttpService,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use todo_mcp::{TodoMcpServer, TodoRepository};

#[derive(Parser)]
#[command(name = "todo-mcp", version, about = "Todo MCP server over streamable HTTP")]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "TODO_MCP_PORT", default_value_t = 8080)]
    port: u16,

    /// Path to a SQLite database file (defaults to an in-memory store)
    #[arg(long)]
    db: Option<PathBuf>,
}

/// Logging goes to stderr. Set LOG_FORMAT=json for structured output.
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("todo_mcp=info".parse()?);

    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    let repository = match &cli.db {
        Some(path) => TodoRepository::open(path)?,
        None => TodoRepository::in_memory()?,
    };

    let service = StreamableHttpService::new(
        move || Ok(TodoMcpServer::new(repository.clone())),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);

    let addr = format!("127.0.0.1:{}", cli.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Todo MCP server listening on http://{}/mcp", addr);

    axum::serve(listener, router).await?;

    tracing::info!("Todo MCP server stopped");

    Ok(())
}
