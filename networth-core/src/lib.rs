pub mod calculations;
pub mod models;
pub mod pricing;
pub mod schedules;

pub use calculations::{
    DEFAULT_MODELED_YEARS, EngineError, NetWorthAggregator, ProgressiveTaxCalculator,
    resolve_deductions,
};
pub use models::*;
pub use pricing::{PriceLookup, StaticPriceBook};
pub use schedules::{ScheduleError, ScheduleTable, Surtax, TaxBracket, TaxBracketSchedule};
