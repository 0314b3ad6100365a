// Report module for candle data rendering
//
// Turns normalized candle series into the text payloads returned by the
// tools: a fixed-width candle table and a period price-change summary.

pub mod formatter;
pub mod price_change;

// Re-export main entry points
pub use formatter::format_candle_table;
pub use price_change::{analyze_price_change, no_data_message, PriceChangeSummary};
