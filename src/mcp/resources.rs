//! MCP Resources Implementation
//!
//! This module exposes Upbit data through `upbit://` URIs:
//! - `upbit://markets`: every listed market code
//! - `upbit://candles/daily/{market}`: the last week of daily candles
//!

use crate::error::{ProviderError, Result};
use crate::market::CandleFetcher;
use crate::tools::DEFAULT_DAYS;
use rmcp::model::{
    AnnotateAble, RawResource, RawResourceTemplate, Resource, ResourceContents, ResourceTemplate,
};

/// Upbit resource URI scheme
pub const UPBIT_SCHEME: &str = "upbit";

/// Market listing URI
pub const MARKETS_URI: &str = "upbit://markets";

/// Template for per-market daily candles
pub const DAILY_CANDLES_URI_TEMPLATE: &str = "upbit://candles/daily/{market}";

/// A parsed resource URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRequest {
    Markets,
    DailyCandles { market: String },
}

/// Parses an `upbit://` URI
pub fn parse_resource_uri(uri: &str) -> Result<ResourceRequest> {
    let (scheme, path) = uri
        .split_once("://")
        .ok_or_else(|| ProviderError::InvalidUri(format!("Invalid URI format: {}", uri)))?;

    if scheme != UPBIT_SCHEME {
        return Err(ProviderError::InvalidUri(format!(
            "Unsupported URI scheme: {}",
            scheme
        )));
    }

    let path_parts: Vec<&str> = path.split('/').collect();
    match path_parts.as_slice() {
        ["markets"] => Ok(ResourceRequest::Markets),
        ["candles", "daily", market] if !market.is_empty() => Ok(ResourceRequest::DailyCandles {
            market: market.to_string(),
        }),
        _ => Err(ProviderError::ResourceNotFound(uri.to_string())),
    }
}

/// Lists all available resources
pub fn list_resources() -> Vec<Resource> {
    let mut markets = RawResource::new(MARKETS_URI, "markets");
    markets.description = Some("All market codes listed on Upbit (e.g., KRW-BTC)".to_string());
    markets.mime_type = Some("application/json".to_string());

    vec![markets.no_annotation()]
}

/// Lists parameterized resources
pub fn list_resource_templates() -> Vec<ResourceTemplate> {
    let daily = RawResourceTemplate {
        uri_template: DAILY_CANDLES_URI_TEMPLATE.to_string(),
        name: "daily-candles".to_string(),
        title: None,
        description: Some(format!(
            "Last {} daily candles for one market as JSON records",
            DEFAULT_DAYS
        )),
        mime_type: Some("application/json".to_string()),
    };

    vec![daily.no_annotation()]
}

/// Reads a resource by URI
///
/// # Arguments
///
/// * `fetcher` - Candle pipeline (its registry backs `upbit://markets`)
/// * `uri` - Resource URI (e.g., "upbit://markets")
///
/// # Returns
///
/// Resource contents as a JSON array
pub async fn read_resource(fetcher: &CandleFetcher, uri: &str) -> Result<ResourceContents> {
    let body = match parse_resource_uri(uri)? {
        ResourceRequest::Markets => {
            let markets = fetcher.registry().get_markets().await?;
            serde_json::to_string(markets.as_ref())?
        }
        ResourceRequest::DailyCandles { market } => {
            let series = fetcher.get_daily_candles(&market, DEFAULT_DAYS, None).await?;
            serde_json::to_string(series.candles())?
        }
    };

    Ok(ResourceContents::text(body, uri))
}
