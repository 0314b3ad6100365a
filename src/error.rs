use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to fetch market symbols: {0}")]
    MarketsUnavailable(#[source] UpbitApiError),

    #[error("Invalid market: {0}. Available markets can be found at upbit://markets")]
    InvalidMarket(String),

    #[error("Invalid date format: '{0}'. Use 'YYYY-MM-DD'.")]
    InvalidDateFormat(String),

    #[error("Failed to fetch candle data: {0}")]
    CandleFetchFailed(#[source] UpbitApiError),

    #[error("Cannot compute percent change for {0}: start price is zero")]
    ZeroStartPrice(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProviderError {
    /// True for errors the caller can fix by changing the request.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            ProviderError::InvalidMarket(_)
                | ProviderError::InvalidDateFormat(_)
                | ProviderError::InvalidUri(_)
                | ProviderError::ResourceNotFound(_)
        )
    }
}

/// Failure talking to the Upbit REST API
#[derive(Error, Debug)]
pub enum UpbitApiError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl UpbitApiError {
    pub fn error_type(&self) -> &'static str {
        match self {
            UpbitApiError::ConnectionError(_) => "connection_error",
            UpbitApiError::RateLimitError(_) => "rate_limit",
            UpbitApiError::ParseError(_) => "parse_error",
            UpbitApiError::InternalError(_) => "internal_error",
        }
    }
}

impl From<reqwest::Error> for UpbitApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpbitApiError::ConnectionError(
                "Request timeout. Please check your internet connection.".to_string(),
            )
        } else if err.is_connect() {
            UpbitApiError::ConnectionError(
                "Failed to connect to Upbit API. Please check your internet connection."
                    .to_string(),
            )
        } else if err.is_decode() {
            UpbitApiError::ParseError(format!("Malformed response body: {}", err))
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                429 => UpbitApiError::RateLimitError(
                    "Too many requests to Upbit API. Retry after a few seconds.".to_string(),
                ),
                418 => UpbitApiError::ConnectionError(
                    "IP address temporarily blocked by Upbit.".to_string(),
                ),
                400 | 404 => UpbitApiError::InternalError(format!(
                    "Upbit rejected the request (HTTP {})",
                    status.as_u16()
                )),
                500..=599 => UpbitApiError::ConnectionError(format!(
                    "Upbit server error (HTTP {}). Please try again later.",
                    status.as_u16()
                )),
                _ => UpbitApiError::InternalError(format!("HTTP error: {}", status)),
            }
        } else {
            UpbitApiError::InternalError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for UpbitApiError {
    fn from(err: serde_json::Error) -> Self {
        UpbitApiError::ParseError(format!("JSON parsing failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
