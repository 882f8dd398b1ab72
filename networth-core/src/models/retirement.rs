use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Retirement account classification.
///
/// Only the traditional (pre-tax) account types reduce taxable income; Roth
/// contributions are post-tax and never produce a deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    RothIra,
    TraditionalIra,
    FourOhOneK,
    FourOhThreeB,
}

impl AccountType {
    /// Whether contributions to this account type reduce taxable income.
    pub fn is_deductible(&self) -> bool {
        match self {
            Self::TraditionalIra | Self::FourOhOneK | Self::FourOhThreeB => true,
            Self::RothIra => false,
        }
    }
}

/// A retirement account with per-year contribution amounts.
///
/// Contributions are keyed by tax year; a year with no entry contributed
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetirementAccount {
    pub id: String,
    pub name: String,
    pub account_type: AccountType,
    pub contributions: BTreeMap<i32, Decimal>,
}

impl RetirementAccount {
    /// The contribution made in the given year, zero when absent.
    pub fn contribution_for(&self, year: i32) -> Decimal {
        self.contributions.get(&year).copied().unwrap_or(Decimal::ZERO)
    }
}
