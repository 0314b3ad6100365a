//! MCP Tool Router and ServerHandler Implementation
//!
//! This module implements the MCP protocol ServerHandler trait and provides
//! tool routing for the Upbit candle tools using rmcp SDK macros.

use crate::error::ProviderError;
use crate::mcp::resources::{DAILY_CANDLES_URI_TEMPLATE, MARKETS_URI};
use crate::mcp::server::UpbitServer;
use crate::mcp::sink::PeerSink;
use crate::mcp::types::{FetchDailyCandlesParam, PriceChangeParam};
use crate::tools;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::handler::server::ServerHandler;
use rmcp::model::{
    CallToolResult, Content, ErrorData, Implementation, InitializeResult,
    ListResourceTemplatesResult, ListResourcesResult,
    PaginatedRequestParam, ProtocolVersion, ReadResourceRequestParam, ReadResourceResult,
    ResourcesCapability, ServerCapabilities, ToolsCapability,
};
use rmcp::service::{Peer, RequestContext, RoleServer};
use rmcp::{tool, tool_handler, tool_router};

/// MCP Tool Router for Upbit candle operations
///
/// Both tools always succeed at the protocol level; failures come back as
/// text in the tool result.
#[tool_router(vis = "pub")]
impl UpbitServer {
    /// Fetch daily candles as a fixed-width table
    #[tool(
        description = "Fetch daily candle data (open, high, low, close, volume) for an Upbit market such as KRW-BTC"
    )]
    pub async fn fetch_daily_candles(
        &self,
        params: Parameters<FetchDailyCandlesParam>,
        peer: Peer<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        let sink = PeerSink::new(peer);

        let text = tools::fetch_daily_candles(
            &self.fetcher,
            &params.market,
            params.days,
            params.end_date.as_deref(),
            Some(&sink),
        )
        .await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Summarize the price change over a period
    #[tool(
        description = "Calculate the price change over a period for an Upbit market: start/end price, change, percent change, period high and low"
    )]
    pub async fn get_price_change(
        &self,
        params: Parameters<PriceChangeParam>,
        peer: Peer<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let params = params.0;
        let sink = PeerSink::new(peer);

        let text =
            tools::get_price_change(&self.fetcher, &params.market, params.days, Some(&sink)).await;

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

/// Maps resource failures to MCP errors
fn resource_error(err: ProviderError) -> ErrorData {
    if err.is_user_correctable() {
        ErrorData::invalid_params(err.to_string(), None)
    } else {
        ErrorData::internal_error(err.to_string(), None)
    }
}

/// ServerHandler trait implementation
///
/// Uses the #[tool_handler] macro to automatically wire the tool router
/// to the ServerHandler trait.
#[tool_handler(router = self.tool_router)]
impl ServerHandler for UpbitServer {
    /// Returns server information and capabilities
    fn get_info(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: Some(ResourcesCapability {
                    subscribe: Some(false),
                    list_changed: Some(false),
                }),
                logging: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "upbit-provider".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("Upbit Daily Candles".to_string()),
                website_url: None,
                icons: None,
            },
            instructions: Some(format!(
                "MCP server for fetching daily candle data from the Upbit API. \
                Read {} for valid market codes and {} for raw candles; \
                use fetch_daily_candles for a table and get_price_change for a period summary.",
                MARKETS_URI, DAILY_CANDLES_URI_TEMPLATE
            )),
        }
    }

    /// Lists all available resources
    async fn list_resources(
        &self,
        _params: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, ErrorData> {
        Ok(ListResourcesResult {
            resources: crate::mcp::resources::list_resources(),
            next_cursor: None,
        })
    }

    /// Lists parameterized resources (`upbit://candles/daily/{market}`)
    async fn list_resource_templates(
        &self,
        _params: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        Ok(ListResourceTemplatesResult {
            resource_templates: crate::mcp::resources::list_resource_templates(),
            next_cursor: None,
        })
    }

    /// Reads a specific resource by URI
    async fn read_resource(
        &self,
        params: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        tracing::debug!(uri = %params.uri, "Reading resource");

        let contents = crate::mcp::resources::read_resource(&self.fetcher, &params.uri)
            .await
            .map_err(resource_error)?;

        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}
