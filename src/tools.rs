//! Tool operations
//!
//! The two invocable operations exposed to MCP clients. Every error from the
//! pipeline is turned into a text result here, so callers always receive a
//! readable payload instead of a protocol fault.

use crate::error::Result;
use crate::market::{CandleFetcher, CandleSeries};
use crate::report::{analyze_price_change, format_candle_table, no_data_message};
use async_trait::async_trait;

/// Days fetched when the caller does not say
pub const DEFAULT_DAYS: i64 = 7;

/// Receiver for informational progress messages
///
/// Delivery is best effort; implementations swallow their own failures.
#[async_trait]
pub trait ProgressSink: Send + Sync {
    async fn info(&self, message: &str);
    async fn error(&self, message: &str);
}

async fn notify_info(sink: Option<&dyn ProgressSink>, message: &str) {
    if let Some(sink) = sink {
        sink.info(message).await;
    }
}

async fn notify_error(sink: Option<&dyn ProgressSink>, message: &str) {
    if let Some(sink) = sink {
        sink.error(message).await;
    }
}

/// `fetch_daily_candles` tool: fixed-width table of daily candles
pub async fn fetch_daily_candles(
    fetcher: &CandleFetcher,
    market: &str,
    days: i64,
    end_date: Option<&str>,
    sink: Option<&dyn ProgressSink>,
) -> String {
    notify_info(
        sink,
        &format!("Fetching {} days of candle data for {}", days, market),
    )
    .await;

    match fetcher.get_daily_candles(market, days, end_date).await {
        Ok(series) => {
            notify_info(sink, &format!("Successfully fetched {} candles", series.len())).await;
            format_candle_table(series.market(), &series)
        }
        Err(e) => {
            let message = format!("Error fetching candle data: {}", e);
            tracing::warn!(market = %market, error = %e, "fetch_daily_candles failed");
            notify_error(sink, &message).await;
            message
        }
    }
}

/// `get_price_change` tool: start/end price, change and period extremes
pub async fn get_price_change(
    fetcher: &CandleFetcher,
    market: &str,
    days: i64,
    sink: Option<&dyn ProgressSink>,
) -> String {
    notify_info(
        sink,
        &format!("Analyzing price change for {} over {} days", market, days),
    )
    .await;

    match price_change_report(fetcher, market, days).await {
        Ok(Some(report)) => {
            notify_info(sink, "Price change analysis completed").await;
            report
        }
        Ok(None) => no_data_message(market),
        Err(e) => {
            let message = format!("Error analyzing price data: {}", e);
            tracing::warn!(market = %market, error = %e, "get_price_change failed");
            notify_error(sink, &message).await;
            message
        }
    }
}

async fn price_change_report(
    fetcher: &CandleFetcher,
    market: &str,
    days: i64,
) -> Result<Option<String>> {
    let series: CandleSeries = fetcher.get_daily_candles(market, days, None).await?;
    Ok(analyze_price_change(&series)?.map(|summary| summary.render(days)))
}
