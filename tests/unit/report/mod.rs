pub mod formatter_tests;
pub mod price_change_tests;
