//! Candle Fetcher
//!
//! Validates a daily-candle request against the market registry, issues the
//! upstream query and normalizes the result.

use super::{bounded, CandleRecord, CandleSeries, MarketId, MarketRegistry, DEFAULT_CALL_TIMEOUT};
use crate::error::{ProviderError, Result};
use crate::upbit::{DailyCandleQuery, UpbitApi, MAX_CANDLE_COUNT};
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;

/// Clamp a requested candle count into `1..=200`
///
/// Out-of-range values are never rejected.
pub fn clamp_count(count: i64) -> u32 {
    count.clamp(1, MAX_CANDLE_COUNT as i64) as u32
}

/// Parse a `YYYY-MM-DD` end date
///
/// Surrounding whitespace is rejected rather than trimmed.
pub fn parse_end_date(raw: &str) -> Result<NaiveDate> {
    if raw.trim() != raw {
        return Err(ProviderError::InvalidDateFormat(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ProviderError::InvalidDateFormat(raw.to_string()))
}

pub struct CandleFetcher {
    source: Arc<dyn UpbitApi>,
    registry: Arc<MarketRegistry>,
    call_timeout: Duration,
}

impl CandleFetcher {
    pub fn new(source: Arc<dyn UpbitApi>, registry: Arc<MarketRegistry>) -> Self {
        Self {
            source,
            registry,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    pub fn registry(&self) -> &Arc<MarketRegistry> {
        &self.registry
    }

    /// Fetch up to `count` daily candles for `market`, newest first
    ///
    /// Validation order: the end date is parsed before anything touches the
    /// network, then the market is checked against the registry, and only
    /// then is the candle endpoint called. An empty `to` counts as absent.
    ///
    /// # Errors
    /// * `InvalidDateFormat` - `to` is not `YYYY-MM-DD`
    /// * `MarketsUnavailable` - registry could not be populated
    /// * `InvalidMarket` - `market` is not a listed market
    /// * `CandleFetchFailed` - upstream call or body normalization failed
    pub async fn get_daily_candles(
        &self,
        market: &str,
        count: i64,
        to: Option<&str>,
    ) -> Result<CandleSeries> {
        let count = clamp_count(count);

        let to = match to.filter(|raw| !raw.is_empty()) {
            Some(raw) => Some(parse_end_date(raw)?),
            None => None,
        };

        if !self.registry.contains(market).await? {
            tracing::warn!(market = %market, "Rejected candle request for unknown market");
            return Err(ProviderError::InvalidMarket(market.to_string()));
        }

        let query = DailyCandleQuery {
            market: market.to_string(),
            count,
            to,
        };

        let upstream = bounded(
            self.source.daily_candles(&query),
            self.call_timeout,
            "daily candles",
        )
        .await
        .map_err(|e| {
            tracing::error!(
                market = %market,
                error_type = e.error_type(),
                error = %e,
                "API request error"
            );
            ProviderError::CandleFetchFailed(e)
        })?;

        let records = upstream
            .into_iter()
            .map(CandleRecord::from_upstream)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(ProviderError::CandleFetchFailed)?;

        tracing::info!(market = %market, count = records.len(), "Fetched daily candles");

        Ok(CandleSeries::new(MarketId::new(market), records))
    }
}
