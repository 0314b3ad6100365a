//! MCP Server Implementation
//!
//! This module contains the UpbitServer struct which implements the MCP ServerHandler trait.

use crate::config::UpstreamConfig;
use crate::error::ProviderError;
use crate::market::{CandleFetcher, MarketRegistry};
use crate::upbit::client::call_budget;
use crate::upbit::{UpbitApi, UpbitClient};
use rmcp::handler::server::router::tool::ToolRouter;
use std::sync::Arc;

/// Main Upbit MCP Server struct
///
/// Clones share the candle fetcher and therefore the market registry, so every
/// session served by one process sees the same cached market list.
#[derive(Clone)]
pub struct UpbitServer {
    /// Candle pipeline (registry + upstream client)
    pub fetcher: Arc<CandleFetcher>,

    /// Tool router for MCP tool routing
    pub tool_router: ToolRouter<Self>,
}

impl UpbitServer {
    /// Creates a server talking to the real Upbit API
    pub fn new(config: &UpstreamConfig) -> Result<Self, ProviderError> {
        let client = UpbitClient::new(config).map_err(|e| ProviderError::Config(e.to_string()))?;
        tracing::info!(base_url = %client.base_url(), "Upbit client initialized");
        Ok(Self::with_source(Arc::new(client), config))
    }

    /// Creates a server over any upstream implementation
    ///
    /// Upstream calls are bounded by the client's full retry budget, not the
    /// single-request timeout.
    pub fn with_source(source: Arc<dyn UpbitApi>, config: &UpstreamConfig) -> Self {
        let call_timeout = call_budget(config);
        tracing::debug!(call_timeout_ms = call_timeout.as_millis() as u64, "Upstream call budget");

        let registry = Arc::new(MarketRegistry::new(source.clone()).with_timeout(call_timeout));
        let fetcher = CandleFetcher::new(source, registry).with_timeout(call_timeout);
        Self::from_fetcher(Arc::new(fetcher))
    }

    /// Creates a server around an existing fetcher
    pub fn from_fetcher(fetcher: Arc<CandleFetcher>) -> Self {
        Self {
            fetcher,
            tool_router: Self::tool_router(),
        }
    }
}
