//! Price-Change Analyzer
//!
//! Period summary over a newest-first candle series: open of the oldest day
//! against close of the newest day, plus the period extremes.

use super::formatter::{format_percentage, format_price};
use crate::error::{ProviderError, Result};
use crate::market::{CandleSeries, MarketId};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceChangeSummary {
    pub market: MarketId,
    /// Date of the oldest candle
    pub from: NaiveDate,
    /// Date of the newest candle
    pub to: NaiveDate,
    pub start_price: f64,
    pub end_price: f64,
    pub absolute_change: f64,
    pub percent_change: f64,
    pub period_high: f64,
    pub period_low: f64,
}

/// Summarize a series
///
/// Returns `Ok(None)` for an empty series so callers can report "no data"
/// rather than fail.
///
/// # Errors
/// `ZeroStartPrice` when the oldest candle opened at zero, since the percent
/// change is undefined.
pub fn analyze_price_change(series: &CandleSeries) -> Result<Option<PriceChangeSummary>> {
    let (oldest, newest) = match (series.oldest(), series.newest()) {
        (Some(oldest), Some(newest)) => (oldest, newest),
        _ => return Ok(None),
    };

    let start_price = oldest.opening_price;
    let end_price = newest.closing_price;
    if start_price == 0.0 {
        return Err(ProviderError::ZeroStartPrice(series.market().to_string()));
    }

    let absolute_change = end_price - start_price;
    let percent_change = absolute_change / start_price * 100.0;

    let period_high = series
        .iter()
        .map(|c| c.high_price)
        .fold(f64::NEG_INFINITY, f64::max);
    let period_low = series
        .iter()
        .map(|c| c.low_price)
        .fold(f64::INFINITY, f64::min);

    Ok(Some(PriceChangeSummary {
        market: series.market().clone(),
        from: oldest.date,
        to: newest.date,
        start_price,
        end_price,
        absolute_change,
        percent_change,
        period_high,
        period_low,
    }))
}

impl PriceChangeSummary {
    /// Text report; `days` is the requested window, echoed in the title
    pub fn render(&self, days: i64) -> String {
        let mut report = format!(
            "Price Change Analysis for {} (Past {} days)\n\n",
            self.market, days
        );
        report.push_str(&format!("Period: {} to {}\n", self.from, self.to));
        report.push_str(&format!("Start Price: {}\n", format_price(self.start_price)));
        report.push_str(&format!("End Price: {}\n", format_price(self.end_price)));
        report.push_str(&format!(
            "Change: {} ({})\n",
            format_price(self.absolute_change),
            format_percentage(self.percent_change)
        ));
        report.push_str(&format!("Period High: {}\n", format_price(self.period_high)));
        report.push_str(&format!("Period Low: {}\n", format_price(self.period_low)));
        report
    }
}

/// Message used when a market returned no candles
pub fn no_data_message(market: &str) -> String {
    format!("No data available for {}", market)
}
