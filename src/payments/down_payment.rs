use tracing::debug;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};

/// principal up to which the flat minimum ratio applies
pub const FIRST_TIER_LIMIT: i64 = 500_000;

/// minimum down payment ratio on the first tier
pub fn first_tier_minimum() -> Rate {
    Rate::from_percentage(5)
}

/// minimum share of the principal above the first tier
pub fn excess_minimum() -> Rate {
    Rate::from_percentage(10)
}

/// required down payment once the principal exceeds the first tier:
/// 5% of the first 500k plus 10% of the excess
pub fn minimum_down_payment(principal: Money) -> Result<Money> {
    let limit = Money::from_major(FIRST_TIER_LIMIT);
    let excess = principal
        .checked_sub(limit)
        .and_then(|excess| excess.checked_apply(excess_minimum()))
        .ok_or_else(|| CalculatorError::computation("minimum down payment overflow"))?;
    let base = limit
        .checked_apply(first_tier_minimum())
        .ok_or_else(|| CalculatorError::computation("minimum down payment overflow"))?;

    excess
        .checked_add(base)
        .ok_or_else(|| CalculatorError::computation("minimum down payment overflow"))
}

/// check a down payment against the minimum rule
///
/// with principal = asking_price - down_payment, a principal of at most 500k needs
/// down_payment / principal >= 5%, anything above needs the tiered minimum
pub fn is_valid_down_payment(down_payment: Money, asking_price: Money) -> Result<bool> {
    let principal = asking_price
        .checked_sub(down_payment)
        .ok_or_else(|| CalculatorError::computation("principal overflow"))?;

    if principal <= Money::from_major(FIRST_TIER_LIMIT) {
        let ratio = down_payment.ratio_to(principal).ok_or_else(|| {
            CalculatorError::computation(format!(
                "down payment {} leaves no principal to finance",
                down_payment
            ))
        })?;
        let valid = ratio >= first_tier_minimum().as_decimal();
        debug!(%principal, %ratio, valid, "down payment checked against first tier");
        return Ok(valid);
    }

    let required = minimum_down_payment(principal)?;
    let valid = down_payment >= required;
    debug!(%principal, %required, valid, "down payment checked against tiered minimum");
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tier_ratio() {
        // principal 400000, 5% of it is 20000
        assert!(is_valid_down_payment(Money::from_major(20_000), Money::from_major(420_000)).unwrap());
        assert!(!is_valid_down_payment(Money::from_major(19_999), Money::from_major(419_999)).unwrap());
        assert!(is_valid_down_payment(Money::from_major(100_000), Money::from_major(500_000)).unwrap());
    }

    #[test]
    fn test_first_tier_boundary_principal() {
        // principal exactly 500000 stays on the ratio rule
        assert!(is_valid_down_payment(Money::from_major(25_000), Money::from_major(525_000)).unwrap());
        assert!(!is_valid_down_payment(Money::from_major(24_999), Money::from_major(524_999)).unwrap());
    }

    #[test]
    fn test_above_first_tier() {
        // principal 575000 needs 75000 * 10% + 25000 = 32500
        let required = minimum_down_payment(Money::from_major(575_000)).unwrap();
        assert_eq!(required, Money::from_major(32_500));

        assert!(!is_valid_down_payment(Money::from_major(25_000), Money::from_major(600_000)).unwrap());
        assert!(is_valid_down_payment(Money::from_major(32_500), Money::from_major(607_500)).unwrap());
    }

    #[test]
    fn test_zero_principal_is_an_error() {
        let result = is_valid_down_payment(Money::from_major(300_000), Money::from_major(300_000));
        assert!(matches!(result, Err(CalculatorError::ComputationFailure { .. })));
    }

    #[test]
    fn test_down_payment_above_price() {
        // negative principal gives a negative ratio
        assert!(!is_valid_down_payment(Money::from_major(350_000), Money::from_major(300_000)).unwrap());
    }
}
