//! Normalized candle records
//!
//! Stable internal shapes the formatter and analyzer consume, independent of
//! the Upbit wire format.

use crate::error::UpbitApiError;
use crate::upbit::DayCandle;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exchange market code pairing quote currency and base asset (e.g. `KRW-BTC`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketId(String);

impl MarketId {
    pub fn new(code: impl Into<String>) -> Self {
        MarketId(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MarketId {
    fn from(code: &str) -> Self {
        MarketId::new(code)
    }
}

impl From<String> for MarketId {
    fn from(code: String) -> Self {
        MarketId(code)
    }
}

impl PartialEq<str> for MarketId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// One trading day
///
/// OHLC consistency is whatever upstream reported; nothing here re-validates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleRecord {
    pub market: MarketId,
    pub date: NaiveDate,
    pub opening_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub closing_price: f64,
    pub traded_volume: f64,
    pub traded_value: f64,
}

impl CandleRecord {
    /// Normalize an upstream candle
    ///
    /// The date is the part of `candle_date_time_kst` left of the `T`
    /// separator. Every other field is a direct rename.
    pub fn from_upstream(candle: DayCandle) -> Result<Self, UpbitApiError> {
        let day = candle
            .candle_date_time_kst
            .split('T')
            .next()
            .unwrap_or_default();
        let date = NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|e| {
            UpbitApiError::ParseError(format!(
                "Unexpected candle timestamp '{}': {}",
                candle.candle_date_time_kst, e
            ))
        })?;

        Ok(Self {
            market: MarketId::from(candle.market),
            date,
            opening_price: candle.opening_price,
            high_price: candle.high_price,
            low_price: candle.low_price,
            closing_price: candle.trade_price,
            traded_volume: candle.candle_acc_trade_volume,
            traded_value: candle.candle_acc_trade_price,
        })
    }
}

/// Candles for one market, newest first
///
/// Construction enforces the ordering so consumers can rely on `newest()` and
/// `oldest()` without trusting upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandleSeries {
    market: MarketId,
    candles: Vec<CandleRecord>,
}

impl CandleSeries {
    pub fn new(market: MarketId, mut candles: Vec<CandleRecord>) -> Self {
        let newest_first = candles.windows(2).all(|pair| pair[0].date >= pair[1].date);
        if !newest_first {
            tracing::warn!(
                market = %market,
                count = candles.len(),
                "Candles were not in reverse-chronological order, re-sorting"
            );
            // Stable, so same-day records keep their relative order
            candles.sort_by(|a, b| b.date.cmp(&a.date));
        }

        Self { market, candles }
    }

    pub fn market(&self) -> &MarketId {
        &self.market
    }

    pub fn candles(&self) -> &[CandleRecord] {
        &self.candles
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn newest(&self) -> Option<&CandleRecord> {
        self.candles.first()
    }

    pub fn oldest(&self) -> Option<&CandleRecord> {
        self.candles.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CandleRecord> {
        self.candles.iter()
    }
}

impl<'a> IntoIterator for &'a CandleSeries {
    type Item = &'a CandleRecord;
    type IntoIter = std::slice::Iter<'a, CandleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.candles.iter()
    }
}
