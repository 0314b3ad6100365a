//! Market Registry
//!
//! Process-lifetime snapshot of valid Upbit market codes. Populated lazily on
//! first access and reused afterwards; `refresh()` replaces it explicitly.

use super::{bounded, MarketId, DEFAULT_CALL_TIMEOUT};
use crate::error::{ProviderError, Result};
use crate::upbit::UpbitApi;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};

/// Cached allow-list of market codes
///
/// Reads share an `RwLock`; population is serialized behind a separate mutex so
/// concurrent first access issues a single upstream call. A failed fetch
/// leaves the snapshot untouched.
pub struct MarketRegistry {
    source: Arc<dyn UpbitApi>,
    snapshot: RwLock<Arc<Vec<MarketId>>>,
    populate: Mutex<()>,
    call_timeout: Duration,
}

impl MarketRegistry {
    pub fn new(source: Arc<dyn UpbitApi>) -> Self {
        Self {
            source,
            snapshot: RwLock::new(Arc::new(Vec::new())),
            populate: Mutex::new(()),
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Returns the cached markets, fetching them on first use
    ///
    /// # Errors
    /// `MarketsUnavailable` if the snapshot is empty and upstream fails
    pub async fn get_markets(&self) -> Result<Arc<Vec<MarketId>>> {
        if let Some(markets) = self.cached().await {
            return Ok(markets);
        }

        let _guard = self.populate.lock().await;

        // Another task may have populated while we waited
        if let Some(markets) = self.cached().await {
            return Ok(markets);
        }

        self.fetch_and_store().await
    }

    /// Re-fetches the market list unconditionally
    ///
    /// On failure the previous snapshot stays in place.
    pub async fn refresh(&self) -> Result<Arc<Vec<MarketId>>> {
        let _guard = self.populate.lock().await;
        self.fetch_and_store().await
    }

    /// Membership test against the (possibly freshly fetched) snapshot
    pub async fn contains(&self, market: &str) -> Result<bool> {
        let markets = self.get_markets().await?;
        Ok(markets.iter().any(|m| m == market))
    }

    /// Current snapshot without touching the network
    pub async fn snapshot(&self) -> Arc<Vec<MarketId>> {
        self.snapshot.read().await.clone()
    }

    async fn cached(&self) -> Option<Arc<Vec<MarketId>>> {
        let snapshot = self.snapshot.read().await;
        if snapshot.is_empty() {
            None
        } else {
            Some(snapshot.clone())
        }
    }

    async fn fetch_and_store(&self) -> Result<Arc<Vec<MarketId>>> {
        let fetched = bounded(self.source.markets(), self.call_timeout, "market list")
            .await
            .map_err(|e| {
                tracing::error!(
                    error_type = e.error_type(),
                    error = %e,
                    "Error fetching market symbols"
                );
                ProviderError::MarketsUnavailable(e)
            })?;

        let markets: Arc<Vec<MarketId>> =
            Arc::new(fetched.into_iter().map(|m| MarketId::from(m.market)).collect());

        tracing::info!(count = markets.len(), "Market registry populated");
        *self.snapshot.write().await = markets.clone();

        Ok(markets)
    }
}

impl std::fmt::Debug for MarketRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketRegistry")
            .field("call_timeout", &self.call_timeout)
            .finish_non_exhaustive()
    }
}
