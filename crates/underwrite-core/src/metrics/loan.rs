use rust_decimal::Decimal;

use crate::types::{Money, Rate};

/// Standard amortizing-loan payment:
/// `principal * r * (1+r)^n / ((1+r)^n - 1)`.
///
/// Degenerate inputs collapse to zero instead of erroring: zero periods,
/// non-positive principal, a compound factor landing exactly on 1
/// (reachable with negative rates), and any step that overflows
/// `Decimal` (extreme rates over a long term). A zero rate amortizes
/// straight-line. The compound factor is built by repeated checked
/// multiplication, which keeps every step in exact `Decimal` arithmetic
/// and bails out the moment the factor leaves the representable range.
pub fn monthly_payment(principal: Money, monthly_rate: Rate, periods: u32) -> Money {
    if periods == 0 || principal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    if monthly_rate == Decimal::ZERO {
        return principal / Decimal::from(periods);
    }

    let growth = Decimal::ONE + monthly_rate;
    let mut compound = Decimal::ONE;
    for _ in 0..periods {
        compound = match compound.checked_mul(growth) {
            Some(value) => value,
            None => return Decimal::ZERO,
        };
    }

    let denominator = compound - Decimal::ONE;
    if denominator == Decimal::ZERO {
        return Decimal::ZERO;
    }

    principal
        .checked_mul(monthly_rate)
        .and_then(|value| value.checked_mul(compound))
        .and_then(|value| value.checked_div(denominator))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_periods_is_zero() {
        assert_eq!(monthly_payment(dec!(500000), dec!(0.004), 0), Decimal::ZERO);
    }

    #[test]
    fn test_non_positive_principal_is_zero() {
        assert_eq!(monthly_payment(Decimal::ZERO, dec!(0.004), 300), Decimal::ZERO);
        assert_eq!(monthly_payment(dec!(-100), dec!(0.004), 300), Decimal::ZERO);
    }

    #[test]
    fn test_zero_rate_amortizes_straight_line() {
        let payment = monthly_payment(dec!(120000), Decimal::ZERO, 300);
        assert_eq!(payment, dec!(400));
    }

    #[test]
    fn test_standard_annuity() {
        // $1M at 5% over 25 years: the textbook figure is $5,845.90
        let payment = monthly_payment(dec!(1000000), dec!(0.05) / dec!(12), 300);
        assert!(payment > dec!(5840) && payment < dec!(5850), "payment: {payment}");
    }

    #[test]
    fn test_thirty_year_annuity() {
        // $1,515,000 at 5% over 30 years
        let payment = monthly_payment(dec!(1515000), dec!(0.05) / dec!(12), 360);
        assert!(payment > dec!(8132) && payment < dec!(8134), "payment: {payment}");
    }

    #[test]
    fn test_negative_rate_stays_finite() {
        let payment = monthly_payment(dec!(100000), dec!(-0.001), 120);
        assert!(payment > dec!(783) && payment < dec!(785), "payment: {payment}");
    }

    #[test]
    fn test_degenerate_compound_factor_is_zero() {
        // monthly rate of -2 makes the growth factor -1, so an even
        // period count lands the compound factor exactly on 1
        assert_eq!(monthly_payment(dec!(100000), dec!(-2), 2), Decimal::ZERO);
    }

    #[test]
    fn test_overflowing_compound_factor_is_zero() {
        // 1.25^360 is far past Decimal's ceiling of ~7.9e28
        assert_eq!(monthly_payment(dec!(1000000), dec!(0.25), 360), Decimal::ZERO);
    }

    #[test]
    fn test_deep_negative_rate_overflow_is_zero() {
        // growth factor of -2 alternates sign while the magnitude explodes
        assert_eq!(monthly_payment(dec!(1000000), dec!(-3), 360), Decimal::ZERO);
    }

    #[test]
    fn test_overflowing_payment_product_is_zero() {
        // 1.2^364 still fits in a Decimal; principal * rate * compound
        // does not
        assert_eq!(monthly_payment(dec!(1000000), dec!(0.2), 364), Decimal::ZERO);
    }
}
