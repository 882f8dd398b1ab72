use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category of a held asset, which decides how the holding is valued.
///
/// Tradable categories are valued by market price lookup; the declared-value
/// categories store a dollar amount directly in the holding's `quantity`
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetType {
    Stock,
    Bond,
    Cash,
    Savings,
    Checking,
    HighYieldSavings,
    Housing,
}

impl AssetType {
    /// Whether holdings of this type are valued via a market price lookup.
    pub fn is_tradable(&self) -> bool {
        match self {
            Self::Stock | Self::Bond => true,
            Self::Cash
            | Self::Savings
            | Self::Checking
            | Self::HighYieldSavings
            | Self::Housing => false,
        }
    }
}

/// A single financial position.
///
/// For tradable assets `quantity` is a share count and `cost_basis` the
/// total purchase cost. For declared-value assets (cash-like accounts and
/// housing) `quantity` holds the current dollar value itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub ticker: String,
    pub quantity: Decimal,
    pub cost_basis: Decimal,
    pub asset_type: AssetType,

    /// Link to the retirement account this holding sits in, if any.
    pub retirement_account_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tradable_split_matches_categories() {
        assert!(AssetType::Stock.is_tradable());
        assert!(AssetType::Bond.is_tradable());
        assert!(!AssetType::Cash.is_tradable());
        assert!(!AssetType::Savings.is_tradable());
        assert!(!AssetType::Checking.is_tradable());
        assert!(!AssetType::HighYieldSavings.is_tradable());
        assert!(!AssetType::Housing.is_tradable());
    }
}
