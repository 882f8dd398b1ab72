//! The tax and net-worth computation engine.

pub mod common;
pub mod deductions;
pub mod net_worth;
pub mod progressive;

pub use deductions::resolve_deductions;
pub use net_worth::{DEFAULT_MODELED_YEARS, EngineError, NetWorthAggregator};
pub use progressive::ProgressiveTaxCalculator;
