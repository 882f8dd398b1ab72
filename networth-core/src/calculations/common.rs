//! Shared helpers for money math.

use rust_decimal::Decimal;

/// Rounds a decimal value to two places using half-up (away from zero)
/// rounding, the usual financial convention.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use networth_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(0.454)), dec!(0.45));
    }

    #[test]
    fn rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(0.455)), dec!(0.46));
    }

    #[test]
    fn rounds_away_from_zero_for_negatives() {
        assert_eq!(round_half_up(dec!(-0.455)), dec!(-0.46));
    }

    #[test]
    fn preserves_already_rounded_values() {
        assert_eq!(round_half_up(dec!(17570.00)), dec!(17570.00));
    }
}
