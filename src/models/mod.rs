pub mod policy;
pub mod result;
pub mod sales;

pub use policy::RatePolicy;
pub use result::{
    Calculation, CalculationFailure, CalculationReport, CalculationResult, RateTable,
    TipOutBreakdown,
};
pub use sales::{DerivedTotals, SalesInput};
