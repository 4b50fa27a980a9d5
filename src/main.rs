use anyhow::Result;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber;

use think_tool::service::ThinkToolService;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing to stderr for MCP compatibility
    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting think-tool MCP server with stdio transport");

    let service = ThinkToolService::new();

    // Start the MCP server on stdio transport
    let server = service.serve(stdio()).await?;

    // This keeps the server running until the transport closes
    server.waiting().await?;

    eprintln!("Server shutting down");
    Ok(())
}
