pub mod calculator;
pub mod distribution;
pub mod format;
pub mod parser;
pub mod ratio;

pub use calculator::TipCalculator;
pub use format::{format_currency, format_percent};
