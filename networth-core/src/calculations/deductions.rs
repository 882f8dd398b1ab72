//! Year-specific retirement deductions.

use rust_decimal::Decimal;

use crate::models::RetirementAccount;

/// Sums the given year's contributions across accounts whose type is
/// pre-tax (Traditional IRA, 401k, 403b). Roth contributions never reduce
/// taxable income.
///
/// The result reduces the federal and state tax base only; FICA stays on
/// gross income.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use rust_decimal_macros::dec;
/// use networth_core::calculations::resolve_deductions;
/// use networth_core::models::{AccountType, RetirementAccount};
///
/// let ira = RetirementAccount {
///     id: "ira-1".into(),
///     name: "Traditional IRA".into(),
///     account_type: AccountType::TraditionalIra,
///     contributions: BTreeMap::from([(2026, dec!(5000))]),
/// };
///
/// assert_eq!(resolve_deductions(&[ira], 2026), dec!(5000));
/// ```
pub fn resolve_deductions(accounts: &[RetirementAccount], year: i32) -> Decimal {
    accounts
        .iter()
        .filter(|account| account.account_type.is_deductible())
        .map(|account| account.contribution_for(year))
        .sum()
}
