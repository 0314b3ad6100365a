//! Upbit API Type Definitions
//!
//! Wire types for the Upbit quotation endpoints. These mirror the JSON the
//! exchange returns; normalization into internal records happens in `market`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Upbit rejects `count` values above this
pub const MAX_CANDLE_COUNT: u32 = 200;

/// Entry from `GET /market/all`
///
/// # Example Response
/// ```json
/// [{"market": "KRW-BTC", "korean_name": "비트코인", "english_name": "Bitcoin"}]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketInfo {
    /// Market code (e.g., "KRW-BTC")
    pub market: String,
    #[serde(default)]
    pub korean_name: Option<String>,
    #[serde(default)]
    pub english_name: Option<String>,
}

/// Entry from `GET /candles/days`
///
/// Only the fields this server consumes are declared; the rest of the payload
/// is ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayCandle {
    pub market: String,
    /// Candle start in KST, e.g. "2024-01-15T09:00:00"
    pub candle_date_time_kst: String,
    pub opening_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    /// Closing price of the day
    pub trade_price: f64,
    pub candle_acc_trade_volume: f64,
    pub candle_acc_trade_price: f64,
}

/// Parameters for `GET /candles/days`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyCandleQuery {
    pub market: String,
    /// Already clamped to 1..=200
    pub count: u32,
    /// Last candle date (exclusive upper bound on the Upbit side)
    pub to: Option<NaiveDate>,
}

impl DailyCandleQuery {
    /// Query-string pairs in the order Upbit documents them
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("market", self.market.clone()),
            ("count", self.count.to_string()),
        ];
        if let Some(to) = self.to {
            pairs.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        pairs
    }
}
