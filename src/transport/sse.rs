//! SSE (Server-Sent Events) transport for MCP
//!
//! Uses rmcp's built-in SSE server implementation for remote connections.

use crate::mcp::UpbitServer;
use anyhow::Context;
use std::net::SocketAddr;

pub use rmcp::transport::sse_server::{SseServer, SseServerConfig};

// Re-export CancellationToken for convenience (required by SseServerConfig)
pub use tokio_util::sync::CancellationToken;

/// Runs the MCP server over SSE until Ctrl+C
///
/// Every SSE session gets a clone of `server`, so all sessions share one
/// market registry.
pub async fn run_sse_server(port: u16, server: UpbitServer) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("0.0.0.0:{}", port)
        .parse()
        .context("invalid listen address")?;
    tracing::info!("Starting SSE server on {}", addr);

    let config = SseServerConfig {
        bind: addr,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: CancellationToken::new(),
        sse_keep_alive: None,
    };

    let sse_server = SseServer::serve_with_config(config)
        .await
        .context("failed to bind SSE server")?;
    tracing::info!("SSE server ready on {}", addr);
    tracing::info!("  SSE endpoint: http://{}/sse", addr);
    tracing::info!("  POST endpoint: http://{}/message", addr);

    let shutdown_ct = sse_server.with_service(move || server.clone());

    tokio::signal::ctrl_c().await?;
    tracing::info!("Received shutdown signal (Ctrl+C)");
    shutdown_ct.cancel();

    Ok(())
}
