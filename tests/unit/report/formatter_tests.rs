// Unit tests for the candle table formatter

use chrono::NaiveDate;
use upbit_provider::market::{CandleRecord, CandleSeries, MarketId};
use upbit_provider::report::formatter::*;

fn record(date: &str, open: f64, high: f64, low: f64, close: f64, volume: f64) -> CandleRecord {
    CandleRecord {
        market: MarketId::new("KRW-BTC"),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        opening_price: open,
        high_price: high,
        low_price: low,
        closing_price: close,
        traded_volume: volume,
        traded_value: close * volume,
    }
}

#[test]
fn test_single_row_is_padded_per_column() {
    let market = MarketId::new("KRW-BTC");
    let series = CandleSeries::new(
        market.clone(),
        vec![record("2024-01-15", 100.5, 110.25, 90.0, 105.75, 12.3)],
    );

    let table = format_candle_table(&market, &series);
    let row = table.lines().nth(4).unwrap();

    assert_eq!(
        row,
        "2024-01-15   100.50     110.25     90.00      105.75     12.30       "
    );
    for value in ["100.50", "110.25", "90.00", "105.75", "12.30"] {
        assert!(row.contains(value), "missing {value}");
    }
}

#[test]
fn test_header_and_rule() {
    let market = MarketId::new("KRW-ETH");
    let series = CandleSeries::new(market.clone(), vec![]);

    let table = format_candle_table(&market, &series);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines[0], "Daily candles for KRW-ETH (past 0 days):");
    assert_eq!(
        lines[2],
        "Date         Open       High       Low        Close      Volume      "
    );
    assert_eq!(lines[3].len(), RULE_WIDTH);
    assert!(lines[3].chars().all(|c| c == '-'));
}

#[test]
fn test_row_count_matches_series() {
    let market = MarketId::new("KRW-BTC");
    let series = CandleSeries::new(
        market.clone(),
        vec![
            record("2024-01-15", 1.0, 1.0, 1.0, 1.0, 1.0),
            record("2024-01-14", 1.0, 1.0, 1.0, 1.0, 1.0),
            record("2024-01-13", 1.0, 1.0, 1.0, 1.0, 1.0),
        ],
    );

    let table = format_candle_table(&market, &series);

    assert!(table.starts_with("Daily candles for KRW-BTC (past 3 days):"));
    assert_eq!(table.lines().count(), 4 + 3);
}

#[test]
fn test_wide_values_overflow_without_truncation() {
    let market = MarketId::new("KRW-BTC");
    let series = CandleSeries::new(
        market.clone(),
        vec![record("2024-01-15", 61_234_567.0, 62_000_000.0, 60_000_000.5, 61_500_000.25, 1234.5)],
    );

    let table = format_candle_table(&market, &series);

    assert!(table.contains("61234567.00 62000000.00 60000000.50 61500000.25 1234.50"));
}

#[test]
fn test_build_row_with_exact_width_cells() {
    let row = build_row(&["abcd".to_string(), "ef".to_string()], &[4, 2]);
    assert_eq!(row, "abcd ef\n");
}
