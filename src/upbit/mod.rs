//! Upbit API Client
//!
//! This module contains the HTTP client for the Upbit quotation API and the
//! `UpbitApi` seam the rest of the crate depends on.

pub mod client;
pub mod rate_limiter;
pub mod types;

use crate::error::UpbitApiError;
use async_trait::async_trait;

// Re-export commonly used types
pub use client::UpbitClient;
pub use types::{DailyCandleQuery, DayCandle, MarketInfo, MAX_CANDLE_COUNT};

/// Upstream quotation endpoints used by the candle pipeline
///
/// `UpbitClient` is the production implementation; tests substitute fakes.
#[async_trait]
pub trait UpbitApi: Send + Sync {
    /// List every tradable market
    async fn markets(&self) -> Result<Vec<MarketInfo>, UpbitApiError>;

    /// Daily candles, newest first
    async fn daily_candles(&self, query: &DailyCandleQuery) -> Result<Vec<DayCandle>, UpbitApiError>;
}
