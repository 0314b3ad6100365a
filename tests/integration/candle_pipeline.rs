// End-to-end tests for registry -> fetcher -> tools

use crate::support::{btc_week, pipeline, StubUpbit};
use std::sync::Arc;
use upbit_provider::error::{ProviderError, UpbitApiError};
use upbit_provider::tools;

#[tokio::test]
async fn test_markets_cached_across_requests() {
    let stub = Arc::new(StubUpbit::new(&["KRW-BTC", "KRW-ETH"], btc_week()));
    let fetcher = pipeline(stub.clone());

    for _ in 0..5 {
        fetcher.get_daily_candles("KRW-BTC", 3, None).await.unwrap();
    }
    let markets = fetcher.registry().get_markets().await.unwrap();

    assert_eq!(markets.len(), 2);
    assert_eq!(stub.market_calls(), 1);
    assert_eq!(stub.queries().len(), 5);
}

#[tokio::test]
async fn test_explicit_refresh_hits_upstream_again() {
    let stub = Arc::new(StubUpbit::new(&["KRW-BTC"], vec![]));
    let fetcher = pipeline(stub.clone());

    fetcher.registry().get_markets().await.unwrap();
    fetcher.registry().refresh().await.unwrap();

    assert_eq!(stub.market_calls(), 2);
}

#[tokio::test]
async fn test_count_above_limit_requests_exactly_200() {
    for requested in [201, 365, 10_000] {
        let stub = Arc::new(StubUpbit::new(&["KRW-BTC"], btc_week()));
        let fetcher = pipeline(stub.clone());

        fetcher.get_daily_candles("KRW-BTC", requested, None).await.unwrap();

        assert_eq!(stub.queries()[0].count, 200, "requested {requested}");
    }
}

#[tokio::test]
async fn test_unknown_market_issues_no_candle_request() {
    let stub = Arc::new(StubUpbit::new(&["KRW-BTC"], btc_week()));
    let fetcher = pipeline(stub.clone());

    let err = fetcher.get_daily_candles("USDT-BTC", 7, None).await.unwrap_err();

    assert!(matches!(err, ProviderError::InvalidMarket(_)));
    assert!(stub.queries().is_empty());
}

#[tokio::test]
async fn test_malformed_dates_issue_no_requests() {
    for bad in ["2024/01/01", "not-a-date", "20240101"] {
        let stub = Arc::new(StubUpbit::new(&["KRW-BTC"], btc_week()));
        let fetcher = pipeline(stub.clone());

        let err = fetcher
            .get_daily_candles("KRW-BTC", 7, Some(bad))
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderError::InvalidDateFormat(_)), "{bad}");
        assert_eq!(stub.market_calls(), 0, "{bad}");
        assert!(stub.queries().is_empty(), "{bad}");
    }
}

#[tokio::test]
async fn test_normalized_records_keep_values() {
    let stub = Arc::new(StubUpbit::new(&["KRW-BTC"], btc_week()));
    let fetcher = pipeline(stub);

    let series = fetcher.get_daily_candles("KRW-BTC", 1, None).await.unwrap();
    let newest = series.newest().unwrap();

    assert_eq!(series.len(), 1);
    assert_eq!(newest.date.to_string(), "2024-01-15");
    assert_eq!(newest.opening_price, 105.0);
    assert_eq!(newest.closing_price, 108.0);
    assert_eq!(newest.traded_volume, 12.3);
}

#[tokio::test]
async fn test_fetch_daily_candles_tool_output() {
    let stub = Arc::new(StubUpbit::new(&["KRW-BTC"], btc_week()));
    let fetcher = pipeline(stub);

    let text = tools::fetch_daily_candles(&fetcher, "KRW-BTC", 3, None, None).await;
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Daily candles for KRW-BTC (past 3 days):");
    assert_eq!(lines.len(), 7);
    assert!(lines[4].starts_with("2024-01-15   105.00"));
    assert!(lines[6].starts_with("2024-01-13   100.00"));
}

#[tokio::test]
async fn test_get_price_change_tool_output() {
    let stub = Arc::new(StubUpbit::new(&["KRW-BTC"], btc_week()));
    let fetcher = pipeline(stub);

    let text = tools::get_price_change(&fetcher, "KRW-BTC", 3, None).await;

    assert_eq!(
        text,
        "Price Change Analysis for KRW-BTC (Past 3 days)\n\n\
         Period: 2024-01-13 to 2024-01-15\n\
         Start Price: 100.00\n\
         End Price: 108.00\n\
         Change: 8.00 (8.00%)\n\
         Period High: 109.00\n\
         Period Low: 98.00\n"
    );
}

#[tokio::test]
async fn test_upstream_failure_is_reported_as_text() {
    let stub = Arc::new(
        StubUpbit::new(&["KRW-BTC"], vec![])
            .failing_candles(|| UpbitApiError::RateLimitError("Too many requests".to_string())),
    );
    let fetcher = pipeline(stub);

    let text = tools::get_price_change(&fetcher, "KRW-BTC", 7, None).await;

    assert_eq!(
        text,
        "Error analyzing price data: Failed to fetch candle data: \
         Rate limit exceeded: Too many requests"
    );
}

#[tokio::test]
async fn test_empty_upstream_reports_no_data() {
    let stub = Arc::new(StubUpbit::new(&["KRW-BTC"], vec![]));
    let fetcher = pipeline(stub);

    let text = tools::get_price_change(&fetcher, "KRW-BTC", 7, None).await;
    assert_eq!(text, "No data available for KRW-BTC");

    let table = tools::fetch_daily_candles(&fetcher, "KRW-BTC", 7, None, None).await;
    assert!(table.starts_with("Daily candles for KRW-BTC (past 0 days):"));
}
