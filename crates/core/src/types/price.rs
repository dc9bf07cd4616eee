//! Money helpers on top of decimal arithmetic.
//!
//! All monetary values in the storefront are `rust_decimal::Decimal` in the
//! currency's standard unit (dollars, not cents). These helpers centralize
//! the rounding and display conventions so callers never hand-roll them.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a monetary amount to whole cents.
///
/// Midpoints round away from zero, matching the register behavior shoppers
/// expect on receipts.
#[must_use]
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount for display (e.g., "$19.99").
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${amount:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(Decimal::new(64048, 4)), Decimal::new(640, 2));
        assert_eq!(round_to_cents(Decimal::new(64050, 4)), Decimal::new(641, 2));
        assert_eq!(round_to_cents(Decimal::new(899, 2)), Decimal::new(899, 2));
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(Decimal::new(78, 0)), "$78.00");
        assert_eq!(format_usd(Decimal::new(899, 2)), "$8.99");
    }
}
