//! MCP Tool Parameter Types
//!
//! This module defines parameter types for MCP tools with JsonSchema support.

use crate::tools::DEFAULT_DAYS;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_days() -> i64 {
    DEFAULT_DAYS
}

/// Parameters for the fetch_daily_candles tool
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct FetchDailyCandlesParam {
    /// Upbit market code
    #[schemars(description = "Market code (e.g., KRW-BTC). See upbit://markets for the full list")]
    pub market: String,

    /// Number of days to fetch
    #[serde(default = "default_days")]
    #[schemars(description = "Number of days to fetch (default: 7, max: 200)")]
    pub days: i64,

    /// Last day to include
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(description = "End date in format YYYY-MM-DD (default: today)")]
    pub end_date: Option<String>,
}

/// Parameters for the get_price_change tool
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PriceChangeParam {
    #[schemars(description = "Market code (e.g., KRW-BTC)")]
    pub market: String,

    #[serde(default = "default_days")]
    #[schemars(description = "Number of days to analyze (default: 7, max: 200)")]
    pub days: i64,
}
