// Unit tests for report components
//
// Organized by component:
// - formatter: fixed-width candle table
// - price_change: period summary

mod report;
