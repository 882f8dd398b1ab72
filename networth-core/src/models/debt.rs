use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An outstanding liability.
///
/// `monthly_payment` and `interest_rate` are informational and default to
/// `None`; the engine only uses the remaining balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    pub name: String,
    pub initial_amount: Decimal,
    pub amount_paid: Decimal,
    pub monthly_payment: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
}

impl Debt {
    /// Remaining balance, floored at zero so overpayment never turns a debt
    /// into an asset.
    pub fn remaining_balance(&self) -> Decimal {
        (self.initial_amount - self.amount_paid).max(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn debt(initial: Decimal, paid: Decimal) -> Debt {
        Debt {
            name: "car loan".into(),
            initial_amount: initial,
            amount_paid: paid,
            monthly_payment: None,
            interest_rate: None,
        }
    }

    #[test]
    fn remaining_balance_subtracts_payments() {
        assert_eq!(debt(dec!(20000), dec!(7500)).remaining_balance(), dec!(12500));
    }

    #[test]
    fn overpaid_debt_has_zero_balance() {
        assert_eq!(debt(dec!(20000), dec!(25000)).remaining_balance(), dec!(0));
    }
}
