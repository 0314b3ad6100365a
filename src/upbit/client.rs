//! Upbit HTTP Client
//!
//! HTTP client wrapper for the Upbit quotation REST API.
//! Provides timeout configuration, user-agent headers, client-side rate
//! limiting and 429 backoff.

use crate::config::UpstreamConfig;
use crate::error::UpbitApiError;
use crate::upbit::rate_limiter::{RateLimiter, QUEUE_TIMEOUT};
use crate::upbit::types::{DailyCandleQuery, DayCandle, MarketInfo};
use crate::upbit::UpbitApi;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

const USER_AGENT: &str = concat!("upbit-provider/", env!("CARGO_PKG_VERSION"));

/// Retries after HTTP 429 before giving up
pub const MAX_RATE_LIMIT_RETRIES: u32 = 3;

/// Longest single 429 backoff, whatever `Retry-After` asks for
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(4);

/// Backoff before retry number `attempt + 1`
///
/// `Retry-After` wins when present; otherwise 1s, 2s, 4s. Capped at
/// `MAX_RETRY_DELAY`.
fn retry_delay(retry_after_secs: Option<u64>, attempt: u32) -> Duration {
    let secs = retry_after_secs.unwrap_or_else(|| 2_u64.saturating_pow(attempt));
    Duration::from_secs(secs).min(MAX_RETRY_DELAY)
}

/// Worst-case wall time of one `UpbitClient` call
///
/// Every attempt may spend the rate-limiter queue timeout plus the HTTP
/// timeout, and every retry adds at most `MAX_RETRY_DELAY`. Outer deadlines
/// around client calls must not be shorter than this, or a slow 429 sequence
/// surfaces as a timeout instead of a rate-limit error.
pub fn call_budget(config: &UpstreamConfig) -> Duration {
    let attempts = MAX_RATE_LIMIT_RETRIES + 1;
    (config.timeout + QUEUE_TIMEOUT) * attempts + MAX_RETRY_DELAY * MAX_RATE_LIMIT_RETRIES
}

/// Upbit REST API HTTP client
///
/// Cheap to clone; clones share the connection pool and the rate limiter.
#[derive(Clone)]
pub struct UpbitClient {
    client: Client,
    base_url: String,
    limiter: Arc<RateLimiter>,
}

impl std::fmt::Debug for UpbitClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpbitClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl UpbitClient {
    /// Creates a client from configuration
    ///
    /// # Errors
    /// Returns `InternalError` if the TLS backend cannot be initialized
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpbitApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| UpbitApiError::InternalError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            limiter: Arc::new(RateLimiter::per_second(config.requests_per_second)),
        })
    }

    /// Returns the configured base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a rate-limited GET and decodes the JSON body
    ///
    /// HTTP 429 is retried up to `MAX_RATE_LIMIT_RETRIES` times; see
    /// `retry_delay` for the wait between attempts.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, UpbitApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut retry_count = 0;

        loop {
            self.limiter
                .wait()
                .await
                .map_err(|e| UpbitApiError::RateLimitError(e.to_string()))?;

            let resp = self.client.get(&url).query(query).send().await?;
            let status = resp.status();

            if status.as_u16() == 429 {
                if retry_count >= MAX_RATE_LIMIT_RETRIES {
                    return Err(UpbitApiError::RateLimitError(format!(
                        "Rate limit exceeded after {} retries",
                        MAX_RATE_LIMIT_RETRIES
                    )));
                }

                let retry_after = resp
                    .headers()
                    .get("retry-after")
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok());
                let delay = retry_delay(retry_after, retry_count);

                tracing::warn!(
                    path = %path,
                    retry = retry_count + 1,
                    max_retries = MAX_RATE_LIMIT_RETRIES,
                    retry_after = ?retry_after,
                    wait_ms = delay.as_millis() as u64,
                    "Upbit rate limit hit (429), backing off"
                );

                tokio::time::sleep(delay).await;
                retry_count += 1;
                continue;
            }

            let resp = match resp.error_for_status() {
                Ok(resp) => resp,
                Err(err) => return Err(UpbitApiError::from(err)),
            };

            // Read as text first so malformed bodies surface as ParseError
            let body = resp.text().await?;
            return Ok(serde_json::from_str(&body)?);
        }
    }
}

#[async_trait]
impl UpbitApi for UpbitClient {
    /// Calls GET /market/all
    async fn markets(&self) -> Result<Vec<MarketInfo>, UpbitApiError> {
        tracing::debug!("Requesting Upbit market list");
        self.get_json("/market/all", &[]).await
    }

    /// Calls GET /candles/days
    async fn daily_candles(&self, query: &DailyCandleQuery) -> Result<Vec<DayCandle>, UpbitApiError> {
        tracing::debug!(
            market = %query.market,
            count = query.count,
            to = ?query.to,
            "Requesting Upbit daily candles"
        );
        self.get_json("/candles/days", &query.query_pairs()).await
    }
}
