pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use error::{TipError, TipResult};
pub use models::{CalculationResult, RatePolicy, SalesInput};
pub use service::TipCalculator;
