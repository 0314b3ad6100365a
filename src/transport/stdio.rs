//! Stdio Transport for MCP Server
//!
//! Provides standard I/O transport for local MCP connections (e.g., Claude Desktop).

use crate::mcp::UpbitServer;
use anyhow::Context;
use rmcp::ServiceExt;

/// Runs the MCP server with stdio transport
///
/// Messages are read from stdin and responses are written to stdout.
/// Logging is sent to stderr to avoid interfering with the MCP protocol.
///
/// # Returns
///
/// Returns Ok(()) when the client disconnects, or an error if initialization fails.
pub async fn run_stdio_server(server: UpbitServer) -> anyhow::Result<()> {
    tracing::info!("Starting Upbit MCP server in stdio mode");

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .context("failed to start stdio transport")?;

    tracing::info!("MCP server ready on stdio");

    service.waiting().await?;

    tracing::info!("MCP server shutdown complete");

    Ok(())
}
