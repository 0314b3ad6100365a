//! Model Context Protocol (MCP) server implementation for the Upbit provider
//!
//! This module provides MCP server capabilities including:
//! - Tool invocation (candle table, price-change analysis)
//! - Resource access (market list and daily candles via URIs)
//! - Progress notifications as MCP logging messages
//!
//! The implementation uses rmcp SDK 0.8.1 with procedural macros for routing.

pub mod handler;
pub mod resources;
pub mod server;
pub mod sink;
pub mod types;

// Re-exports
pub use server::UpbitServer;
