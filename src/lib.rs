// Library exports for upbit-provider

pub mod error;
pub mod tools;

// Upbit API integration modules
pub mod config; // Configuration management
pub mod upbit; // Upbit API client

// Candle pipeline
pub mod market; // Market registry and candle fetcher
pub mod report; // Candle table and price-change rendering

#[cfg(feature = "mcp_server")]
pub mod mcp; // MCP server implementation

#[cfg(feature = "mcp_server")]
pub mod transport; // MCP transports (stdio, SSE)
