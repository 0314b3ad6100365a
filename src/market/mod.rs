//! Market data pipeline
//!
//! Registry of valid market codes, the daily-candle fetcher that validates
//! against it, and the normalized record types both produce.

pub mod fetcher;
pub mod registry;
pub mod types;

pub use fetcher::CandleFetcher;
pub use registry::MarketRegistry;
pub use types::{CandleRecord, CandleSeries, MarketId};

use crate::error::UpbitApiError;
use std::future::Future;
use std::time::Duration;

/// Outer bound on a single upstream call, on top of the HTTP client timeout
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(15);

/// Runs an upstream call under `limit`, mapping expiry to a connection error
pub(crate) async fn bounded<T, F>(
    future: F,
    limit: Duration,
    operation: &str,
) -> Result<T, UpbitApiError>
where
    F: Future<Output = Result<T, UpbitApiError>>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result,
        Err(_elapsed) => {
            tracing::warn!(
                operation = %operation,
                timeout_ms = limit.as_millis() as u64,
                "Upstream call exceeded timeout"
            );
            Err(UpbitApiError::ConnectionError(format!(
                "{} timed out after {}ms",
                operation,
                limit.as_millis()
            )))
        }
    }
}
