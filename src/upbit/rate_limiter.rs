//! Client-side rate limiter for Upbit API requests
//!
//! Implements GCRA (Generic Cell Rate Algorithm) via governor crate.
//! Upbit's quotation endpoints allow 10 requests/second per IP; excess requests
//! are queued for up to 5 seconds before being rejected.

use governor::{
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter as GovernorRateLimiter,
};
use std::num::NonZeroU32;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Maximum time to wait in queue before rejecting request
const QUEUE_TIMEOUT_SECS: u64 = 5;

/// `QUEUE_TIMEOUT_SECS` as a `Duration`
pub const QUEUE_TIMEOUT: Duration = Duration::from_secs(QUEUE_TIMEOUT_SECS);

/// Rate limiter errors
#[derive(Debug, Error)]
pub enum RateLimiterError {
    #[error("Rate limit queue timeout after {0}s")]
    QueueTimeout(u64),
}

/// Client-side rate limiter for REST API requests
pub struct RateLimiter {
    limiter: GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    queue_timeout: Duration,
}

impl std::fmt::Debug for RateLimiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateLimiter")
            .field("queue_timeout", &self.queue_timeout)
            .finish()
    }
}

impl RateLimiter {
    /// Create a limiter allowing `requests_per_second` with the default queue timeout
    ///
    /// A zero budget is treated as one request per second.
    pub fn per_second(requests_per_second: u32) -> Self {
        Self::with_quota(requests_per_second, QUEUE_TIMEOUT_SECS)
    }

    /// Create a rate limiter with custom settings (for testing)
    pub fn with_quota(requests_per_second: u32, queue_timeout_secs: u64) -> Self {
        let per_second = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);

        Self {
            limiter: GovernorRateLimiter::direct(Quota::per_second(per_second)),
            queue_timeout: Duration::from_secs(queue_timeout_secs),
        }
    }

    /// Wait for rate limit permission (async, with timeout)
    ///
    /// Returns Ok(()) when request is allowed, Err if queue timeout exceeded.
    pub async fn wait(&self) -> Result<(), RateLimiterError> {
        if self.limiter.check().is_ok() {
            debug!("Rate limit permission granted");
            return Ok(());
        }

        debug!("Rate limit budget exhausted, queueing request");
        match timeout(self.queue_timeout, self.limiter.until_ready()).await {
            Ok(()) => Ok(()),
            Err(_) => {
                warn!(
                    timeout_secs = self.queue_timeout.as_secs(),
                    "Rate limit queue timeout exceeded"
                );
                Err(RateLimiterError::QueueTimeout(self.queue_timeout.as_secs()))
            }
        }
    }
}
