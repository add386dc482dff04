use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};

/// down payments at or above this amount never carry a premium
pub const UNINSURED_DOWN_PAYMENT: i64 = 1_000_000;

/// mortgage insurance tier, keyed by down payment / principal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsuranceTier {
    /// ratio in [0.05, 0.10)
    Minimum,
    /// ratio in [0.10, 0.15)
    Reduced,
    /// ratio in [0.15, 0.20)
    Low,
}

impl InsuranceTier {
    /// tier for a down payment ratio, None when no premium applies
    pub fn for_ratio(ratio: Decimal) -> Option<Self> {
        if ratio >= dec!(0.05) && ratio < dec!(0.10) {
            Some(InsuranceTier::Minimum)
        } else if ratio >= dec!(0.10) && ratio < dec!(0.15) {
            Some(InsuranceTier::Reduced)
        } else if ratio >= dec!(0.15) && ratio < dec!(0.20) {
            Some(InsuranceTier::Low)
        } else {
            None
        }
    }

    /// premium charged on the principal
    pub fn premium_rate(&self) -> Rate {
        match self {
            InsuranceTier::Minimum => Rate::from_bps(315),
            InsuranceTier::Reduced => Rate::from_bps(240),
            InsuranceTier::Low => Rate::from_bps(180),
        }
    }
}

/// mortgage insurance fee added to the principal
///
/// zero when the down payment is 20% of the principal or more, when it reaches
/// 1,000,000, when the ratio is below 5%, or when nothing is financed
pub fn insurance_fee(down_payment: Money, asking_price: Money) -> Result<Money> {
    if down_payment >= Money::from_major(UNINSURED_DOWN_PAYMENT) {
        return Ok(Money::ZERO);
    }

    let principal = asking_price
        .checked_sub(down_payment)
        .ok_or_else(|| CalculatorError::computation("principal overflow"))?;

    let Some(ratio) = down_payment.ratio_to(principal) else {
        return Ok(Money::ZERO);
    };

    let Some(tier) = InsuranceTier::for_ratio(ratio) else {
        return Ok(Money::ZERO);
    };

    let fee = principal
        .checked_apply(tier.premium_rate())
        .ok_or_else(|| CalculatorError::computation("insurance fee overflow"))?;

    debug!(%principal, %ratio, ?tier, %fee, "mortgage insurance applied");

    Ok(fee)
}
