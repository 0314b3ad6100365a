// In-memory Upbit upstream for integration tests

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use upbit_provider::error::UpbitApiError;
use upbit_provider::market::{CandleFetcher, MarketRegistry};
use upbit_provider::upbit::{DailyCandleQuery, DayCandle, MarketInfo, UpbitApi};

#[derive(Default)]
pub struct StubUpbit {
    pub markets: Vec<String>,
    pub candles: Vec<DayCandle>,
    pub candle_error: Option<fn() -> UpbitApiError>,
    market_calls: AtomicUsize,
    queries: Mutex<Vec<DailyCandleQuery>>,
}

impl StubUpbit {
    pub fn new(markets: &[&str], candles: Vec<DayCandle>) -> Self {
        Self {
            markets: markets.iter().map(|m| m.to_string()).collect(),
            candles,
            ..Default::default()
        }
    }

    pub fn failing_candles(mut self, make_error: fn() -> UpbitApiError) -> Self {
        self.candle_error = Some(make_error);
        self
    }

    pub fn market_calls(&self) -> usize {
        self.market_calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<DailyCandleQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpbitApi for StubUpbit {
    async fn markets(&self) -> Result<Vec<MarketInfo>, UpbitApiError> {
        self.market_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .markets
            .iter()
            .map(|m| MarketInfo {
                market: m.clone(),
                korean_name: None,
                english_name: None,
            })
            .collect())
    }

    async fn daily_candles(&self, query: &DailyCandleQuery) -> Result<Vec<DayCandle>, UpbitApiError> {
        self.queries.lock().unwrap().push(query.clone());
        match self.candle_error {
            Some(make_error) => Err(make_error()),
            None => Ok(self.candles.iter().take(query.count as usize).cloned().collect()),
        }
    }
}

/// Upstream-shaped candle parsed from JSON, as Upbit would send it
pub fn upstream_candle(date: &str, open: f64, high: f64, low: f64, close: f64, volume: f64) -> DayCandle {
    let json = serde_json::json!({
        "market": "KRW-BTC",
        "candle_date_time_utc": format!("{}T00:00:00", date),
        "candle_date_time_kst": format!("{}T09:00:00", date),
        "opening_price": open,
        "high_price": high,
        "low_price": low,
        "trade_price": close,
        "timestamp": 1_705_363_199_999_i64,
        "candle_acc_trade_price": close * volume,
        "candle_acc_trade_volume": volume,
        "prev_closing_price": open,
        "change_price": close - open,
        "change_rate": (close - open) / open,
    });
    serde_json::from_value(json).unwrap()
}

/// Three BTC days, newest first: opens 105/102/100, closes 108/103/101
pub fn btc_week() -> Vec<DayCandle> {
    vec![
        upstream_candle("2024-01-15", 105.0, 109.0, 104.0, 108.0, 12.3),
        upstream_candle("2024-01-14", 102.0, 104.0, 101.0, 103.0, 8.0),
        upstream_candle("2024-01-13", 100.0, 102.0, 98.0, 101.0, 5.5),
    ]
}

pub fn pipeline(stub: Arc<StubUpbit>) -> CandleFetcher {
    let registry = Arc::new(MarketRegistry::new(stub.clone()));
    CandleFetcher::new(stub, registry)
}
