// Fixed-width text formatting for candle reports

use crate::market::{CandleSeries, MarketId};

/// Column widths: date, open, high, low, close, volume
pub const COLUMN_WIDTHS: [usize; 6] = [12, 10, 10, 10, 10, 12];

/// Column titles matching `COLUMN_WIDTHS`
pub const COLUMN_TITLES: [&str; 6] = ["Date", "Open", "High", "Low", "Close", "Volume"];

/// Width of the rule under the column header
pub const RULE_WIDTH: usize = 70;

/// Build a fixed-width row, each cell left-justified in its column
///
/// Columns are separated by a single space; the last cell is still padded.
pub fn build_row(cells: &[String], widths: &[usize]) -> String {
    let mut row = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(" ");
    row.push('\n');
    row
}

/// Build a horizontal rule
pub fn build_rule(width: usize) -> String {
    let mut rule = "-".repeat(width);
    rule.push('\n');
    rule
}

/// Format a price with exactly two decimals
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a percentage value
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value)
}

/// Render candles as a fixed-width table
///
/// ```text
/// Daily candles for KRW-BTC (past 1 days):
///
/// Date         Open       High       Low        Close      Volume
/// ----------------------------------------------------------------------
/// 2024-01-15   100.50     110.25     90.00      105.75     12.30
/// ```
pub fn format_candle_table(market: &MarketId, series: &CandleSeries) -> String {
    let mut table = format!(
        "Daily candles for {} (past {} days):\n\n",
        market,
        series.len()
    );

    let titles: Vec<String> = COLUMN_TITLES.iter().map(|t| t.to_string()).collect();
    table.push_str(&build_row(&titles, &COLUMN_WIDTHS));
    table.push_str(&build_rule(RULE_WIDTH));

    for candle in series {
        let cells = [
            candle.date.format("%Y-%m-%d").to_string(),
            format_price(candle.opening_price),
            format_price(candle.high_price),
            format_price(candle.low_price),
            format_price(candle.closing_price),
            format_price(candle.traded_volume),
        ];
        table.push_str(&build_row(&cells, &COLUMN_WIDTHS));
    }

    table
}
