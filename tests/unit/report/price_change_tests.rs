// Unit tests for the price-change analyzer

use chrono::NaiveDate;
use upbit_provider::error::ProviderError;
use upbit_provider::market::{CandleRecord, CandleSeries, MarketId};
use upbit_provider::report::{analyze_price_change, no_data_message};

fn record(date: &str, open: f64, high: f64, low: f64, close: f64) -> CandleRecord {
    CandleRecord {
        market: MarketId::new("KRW-BTC"),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        opening_price: open,
        high_price: high,
        low_price: low,
        closing_price: close,
        traded_volume: 0.0,
        traded_value: 0.0,
    }
}

#[test]
fn test_three_day_scenario() {
    let series = CandleSeries::new(
        MarketId::new("KRW-BTC"),
        vec![
            record("2024-01-15", 105.0, 108.5, 104.0, 108.0),
            record("2024-01-14", 102.0, 103.5, 101.5, 103.0),
            record("2024-01-13", 100.0, 101.5, 99.5, 101.0),
        ],
    );

    let summary = analyze_price_change(&series).unwrap().unwrap();

    assert_eq!(summary.start_price, 100.0);
    assert_eq!(summary.end_price, 108.0);
    assert_eq!(summary.absolute_change, 8.0);
    assert_eq!(format!("{:.2}", summary.percent_change), "8.00");
    assert_eq!(summary.period_high, 108.5);
    assert_eq!(summary.period_low, 99.5);
}

#[test]
fn test_out_of_order_input_is_normalized_first() {
    // Oldest first; the series re-sorts so oldest/newest are still right
    let series = CandleSeries::new(
        MarketId::new("KRW-BTC"),
        vec![
            record("2024-01-13", 100.0, 101.0, 99.0, 101.0),
            record("2024-01-14", 102.0, 103.0, 101.0, 103.0),
            record("2024-01-15", 105.0, 108.0, 104.0, 108.0),
        ],
    );

    let summary = analyze_price_change(&series).unwrap().unwrap();

    assert_eq!(summary.start_price, 100.0);
    assert_eq!(summary.end_price, 108.0);
    assert_eq!(summary.from.to_string(), "2024-01-13");
    assert_eq!(summary.to.to_string(), "2024-01-15");
}

#[test]
fn test_negative_change_renders_sign() {
    let series = CandleSeries::new(
        MarketId::new("KRW-BTC"),
        vec![
            record("2024-01-15", 95.0, 96.0, 89.0, 90.0),
            record("2024-01-14", 120.0, 121.0, 94.0, 95.0),
        ],
    );

    let report = analyze_price_change(&series).unwrap().unwrap().render(2);

    assert!(report.contains("Change: -30.00 (-25.00%)"), "{report}");
    assert!(report.contains("Period High: 121.00"));
    assert!(report.contains("Period Low: 89.00"));
}

#[test]
fn test_empty_and_zero_start() {
    let empty = CandleSeries::new(MarketId::new("KRW-XRP"), vec![]);
    assert!(analyze_price_change(&empty).unwrap().is_none());
    assert_eq!(no_data_message("KRW-XRP"), "No data available for KRW-XRP");

    let zero = CandleSeries::new(
        MarketId::new("KRW-BTC"),
        vec![record("2024-01-15", 0.0, 5.0, 0.0, 5.0)],
    );
    assert!(matches!(
        analyze_price_change(&zero),
        Err(ProviderError::ZeroStartPrice(_))
    ));
}
