pub mod config;
pub mod listing;
pub mod output;
pub mod valuation;

pub use valuation::{estimate_price, price_range, rank};
