mod debt;
mod filing_status;
mod holding;
mod income;
mod jurisdiction;
mod profile;
mod report;
mod retirement;

pub use debt::Debt;
pub use filing_status::FilingStatus;
pub use holding::{AssetType, Holding};
pub use income::{IncomeRecord, IncomeType};
pub use jurisdiction::{Jurisdiction, UsState};
pub use profile::TaxpayerProfile;
pub use report::{NetWorthReport, YearTaxSummary};
pub use retirement::{AccountType, RetirementAccount};
