use rust_decimal::Decimal;
use tracing::debug;

use crate::decimal::Rate;
use crate::errors::{CalculatorError, Result};
use crate::types::PaymentFrequency;

/// derive the amortization factor for a schedule and a frequency label
///
/// payment = principal * factor, principal = payment / factor
pub fn derive_factor(years: u32, frequency_label: &str, annual_rate: Rate) -> Result<Decimal> {
    let frequency: PaymentFrequency = frequency_label.parse()?;
    factor_for(years, frequency, annual_rate)
}

/// amortization factor for an already parsed frequency
///
/// factor = r * (1 + r)^n / ((1 + r)^n - 1), evaluated as r / (1 - v^n)
/// with v = 1 / (1 + r), n = years * 12 * f and r = annual_rate / (12 * f)
pub fn factor_for(years: u32, frequency: PaymentFrequency, annual_rate: Rate) -> Result<Decimal> {
    let periods_per_year = frequency.periods_per_year();
    let n = years
        .checked_mul(periods_per_year)
        .ok_or_else(|| CalculatorError::computation("too many compounding periods"))?;
    let r = annual_rate
        .periodic_rate(periods_per_year)
        .ok_or_else(|| CalculatorError::computation("periodic rate out of range"))?
        .as_decimal();

    // v^n shrinks toward zero for positive rates, so high rates stay finite
    let discount = discount_factor(r, n)?;

    let denominator = Decimal::ONE
        .checked_sub(discount)
        .ok_or_else(|| CalculatorError::computation("amortization denominator overflow"))?;

    if denominator.is_zero() {
        return Err(CalculatorError::computation(format!(
            "amortization factor undefined at {} annual rate",
            annual_rate
        )));
    }

    let factor = r
        .checked_div(denominator)
        .ok_or_else(|| CalculatorError::computation("amortization factor overflow"))?;

    debug!(years, %frequency, %annual_rate, n, %factor, "derived amortization factor");

    Ok(factor)
}

/// (1 + r)^-n by repeated multiplication of the per-period discount
fn discount_factor(r: Decimal, n: u32) -> Result<Decimal> {
    let v = Decimal::ONE
        .checked_add(r)
        .and_then(|base| Decimal::ONE.checked_div(base))
        .ok_or_else(|| CalculatorError::computation("periodic rate has no discount factor"))?;

    let mut discount = Decimal::ONE;
    for _ in 0..n {
        discount = discount
            .checked_mul(v)
            .ok_or_else(|| CalculatorError::computation("discounting overflow"))?;
    }

    Ok(discount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn default_rate() -> Rate {
        Rate::from_decimal(dec!(0.025))
    }

    #[test]
    fn test_monthly_factor() {
        let factor = derive_factor(25, "monthly", default_rate()).unwrap();

        // 0.025 / 12 over 300 periods
        assert!(factor > dec!(0.0044861));
        assert!(factor < dec!(0.0044862));
    }

    #[test]
    fn test_label_case_does_not_matter() {
        let expected = derive_factor(25, "monthly", default_rate()).unwrap();
        for label in ["Monthly", "MONTHLY", "mOnThLy"] {
            assert_eq!(derive_factor(25, label, default_rate()).unwrap(), expected);
        }

        let weekly = derive_factor(10, "weekly", default_rate()).unwrap();
        assert_eq!(derive_factor(10, "WEEKLY", default_rate()).unwrap(), weekly);
    }

    #[test]
    fn test_more_frequent_payments_have_smaller_factor() {
        let monthly = factor_for(25, PaymentFrequency::Monthly, default_rate()).unwrap();
        let biweekly = factor_for(25, PaymentFrequency::Biweekly, default_rate()).unwrap();
        let weekly = factor_for(25, PaymentFrequency::Weekly, default_rate()).unwrap();

        assert!(weekly < biweekly);
        assert!(biweekly < monthly);
    }

    #[test]
    fn test_longer_schedule_has_smaller_factor() {
        let short = factor_for(5, PaymentFrequency::Monthly, default_rate()).unwrap();
        let long = factor_for(25, PaymentFrequency::Monthly, default_rate()).unwrap();
        assert!(long < short);

        // a 5 year monthly factor sits above the straight-line 1/60
        assert!(short > Decimal::ONE / dec!(60));
    }

    #[test]
    fn test_unknown_label() {
        let result = derive_factor(25, "daily", default_rate());
        assert_eq!(
            result,
            Err(CalculatorError::InvalidFrequency { label: "daily".to_string() })
        );
    }

    #[test]
    fn test_zero_rate_is_a_computation_failure() {
        let result = derive_factor(25, "monthly", Rate::ZERO);
        assert!(matches!(result, Err(CalculatorError::ComputationFailure { .. })));
    }

    #[test]
    fn test_negative_rate_still_derives() {
        // no bounds on the stored rate, a negative one still yields a finite factor
        let factor = derive_factor(5, "monthly", Rate::from_decimal(dec!(-0.01))).unwrap();
        assert!(factor > Decimal::ZERO);
        assert!(factor < Decimal::ONE / dec!(60));
    }

    #[test]
    fn test_high_rate_stays_finite() {
        // (1 + r)^n alone would pass Decimal::MAX here
        let rate = Rate::from_decimal(dec!(3.0));
        let factor = factor_for(25, PaymentFrequency::Monthly, rate).unwrap();
        assert_eq!(factor, dec!(0.25));

        let rate = Rate::from_decimal(dec!(1000000));
        let factor = factor_for(25, PaymentFrequency::Weekly, rate).unwrap();
        assert_eq!(factor, rate.periodic_rate(48).unwrap().as_decimal());
    }

    #[test]
    fn test_rate_of_minus_one_per_period_fails_cleanly() {
        // 1 + r == 0 has no discount factor
        let result = derive_factor(25, "monthly", Rate::from_decimal(dec!(-12)));
        assert!(matches!(result, Err(CalculatorError::ComputationFailure { .. })));

        // v = 1200 per period overflows long before 300 periods
        let result = derive_factor(25, "monthly", Rate::from_decimal(dec!(-11.99)));
        assert!(matches!(result, Err(CalculatorError::ComputationFailure { .. })));
    }
}
