use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Money type for currency amounts, kept at full decimal precision until rounded explicitly
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d)
    }

    /// create from integer amount (dollars, euros, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// create from a float received at the api boundary, None for NaN, infinities
    /// and values outside the decimal range
    pub fn try_from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Decimal::from_f64(value).map(Money)
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// nearest float, for json output
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// round half up on the scaled value: floor(x * 10^dp + 0.5) / 10^dp
    pub fn round_half_up(&self, dp: u32) -> Self {
        // floor(x + 0.5) moves negative midpoints toward zero
        let strategy = if self.0.is_sign_negative() {
            RoundingStrategy::MidpointTowardZero
        } else {
            RoundingStrategy::MidpointAwayFromZero
        };
        Money(self.0.round_dp_with_strategy(dp, strategy))
    }

    /// check if strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// check if strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).map(Money)
    }

    pub fn checked_mul(self, factor: Decimal) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }

    /// None when the divisor is zero or the quotient overflows
    pub fn checked_div(self, divisor: Decimal) -> Option<Money> {
        self.0.checked_div(divisor).map(Money)
    }

    /// self as a fraction of `base`, None when base is zero
    pub fn ratio_to(self, base: Money) -> Option<Decimal> {
        self.0.checked_div(base.0)
    }

    /// apply a rate, e.g. a 3.15% premium on a principal
    pub fn checked_apply(self, rate: Rate) -> Option<Money> {
        self.checked_mul(rate.as_decimal())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// rate type for interest rates, percentages, and ratios
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal (e.g., 0.05 for 5%)
    pub const fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from percentage (e.g., 5 for 5%)
    pub fn from_percentage(p: u32) -> Self {
        Rate(Decimal::from(p) / Decimal::from(100))
    }

    /// create from basis points (e.g., 315 for 3.15%)
    pub fn from_bps(bps: u32) -> Self {
        Rate(Decimal::from(bps) / Decimal::from(10000))
    }

    /// create from a float received at the api boundary
    pub fn try_from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        Decimal::from_f64(value).map(Rate)
    }

    /// get as decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage
    pub fn as_percentage(&self) -> Decimal {
        self.0 * Decimal::from(100)
    }

    /// nearest float, for json output
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    /// per-period rate for an annual nominal rate split into `periods_per_year`
    pub fn periodic_rate(&self, periods_per_year: u32) -> Option<Rate> {
        self.0.checked_div(Decimal::from(periods_per_year)).map(Rate)
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_keeps_precision() {
        let m = Money::from_decimal(dec!(100.123456789));
        assert_eq!(m.to_string(), "100.123456789");
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(Money::from_decimal(dec!(1794.465)).round_half_up(2), Money::from_decimal(dec!(1794.47)));
        assert_eq!(Money::from_decimal(dec!(1794.4649)).round_half_up(2), Money::from_decimal(dec!(1794.46)));
        assert_eq!(Money::from_decimal(dec!(0.125)).round_half_up(2), Money::from_decimal(dec!(0.13)));

        // not banker's rounding
        assert_eq!(Money::from_decimal(dec!(2.345)).round_half_up(2).to_string(), "2.35");

        // floor(x + 0.5) semantics on negatives
        assert_eq!(Money::from_decimal(dec!(-2.345)).round_half_up(2).to_string(), "-2.34");
        assert_eq!(Money::from_decimal(dec!(-2.346)).round_half_up(2).to_string(), "-2.35");
    }

    #[test]
    fn test_float_boundary_conversion() {
        assert_eq!(Money::try_from_f64(500000.0), Some(Money::from_major(500_000)));
        assert_eq!(Rate::try_from_f64(0.03), Some(Rate::from_decimal(dec!(0.03))));
        assert_eq!(Money::try_from_f64(f64::NAN), None);
        assert_eq!(Money::try_from_f64(f64::INFINITY), None);
        assert_eq!(Money::try_from_f64(1e300), None);
        assert_eq!(Rate::try_from_f64(f64::NEG_INFINITY), None);

        assert_eq!(Money::from_decimal(dec!(1794.47)).to_f64(), 1794.47);
        assert_eq!(Rate::from_decimal(dec!(0.025)).to_f64(), 0.025);
    }

    #[test]
    fn test_checked_arithmetic() {
        let principal = Money::from_major(400_000);
        assert_eq!(principal.checked_div(Decimal::ZERO), None);
        assert_eq!(principal.ratio_to(Money::ZERO), None);
        assert_eq!(Money::from_decimal(Decimal::MAX).checked_add(principal), None);
        assert_eq!(Money::from_decimal(Decimal::MAX).checked_mul(dec!(2)), None);

        let fee = principal.checked_apply(Rate::from_bps(315)).unwrap();
        assert_eq!(fee, Money::from_major(12_600));

        let ratio = Money::from_major(36_000).ratio_to(principal).unwrap();
        assert_eq!(ratio, dec!(0.09));
    }

    #[test]
    fn test_rate_conversions() {
        let rate = Rate::from_decimal(dec!(0.025));
        assert_eq!(rate.as_percentage(), dec!(2.5));
        assert_eq!(rate.to_string(), "2.5%");
        assert_eq!(Rate::from_percentage(5).as_decimal(), dec!(0.05));
        assert_eq!(Rate::from_bps(240).as_decimal(), dec!(0.024));

        let monthly = rate.periodic_rate(12).unwrap();
        assert!(monthly.as_decimal() > dec!(0.0020833));
        assert!(monthly.as_decimal() < dec!(0.0020834));
        assert_eq!(rate.periodic_rate(0), None);
    }
}
