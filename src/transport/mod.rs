//! MCP transport layer
//!
//! Provides transport options for the MCP protocol:
//! - Stdio: Standard I/O for local connections (e.g., Claude Desktop)
//! - SSE: Server-Sent Events for remote connections

pub mod sse;
pub mod stdio;

use std::fmt;
use std::str::FromStr;

/// Default SSE listen port
pub const DEFAULT_SSE_PORT: u16 = 8000;

/// Transport mode selection for MCP server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    /// Standard I/O transport (local MCP connections)
    #[default]
    Stdio,

    /// Server-Sent Events transport (remote MCP connections)
    Sse,
}

impl FromStr for TransportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stdio" => Ok(Self::Stdio),
            "sse" => Ok(Self::Sse),
            other => Err(format!("Invalid mode: {} (expected stdio or sse)", other)),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdio => f.write_str("stdio"),
            Self::Sse => f.write_str("sse"),
        }
    }
}
