pub mod amortization;
pub mod down_payment;
pub mod insurance;

use tracing::debug;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::types::validate_schedule;

pub use amortization::{derive_factor, factor_for};
pub use down_payment::{is_valid_down_payment, minimum_down_payment};
pub use insurance::{insurance_fee, InsuranceTier};

/// decimal places of every amount handed back to callers
pub const AMOUNT_DP: u32 = 2;

/// periodic payment for a purchase
///
/// checks run in order: schedule, down payment, then the frequency label;
/// the financed principal includes the mortgage insurance fee
pub fn compute_payment(
    asking_price: Money,
    down_payment: Money,
    years: i64,
    frequency_label: &str,
    annual_rate: Rate,
) -> Result<Money> {
    let years = validate_schedule(years)?;

    if !is_valid_down_payment(down_payment, asking_price)? {
        return Err(CalculatorError::InvalidDownPayment {
            down_payment,
            asking_price,
        });
    }

    let factor = derive_factor(years, frequency_label, annual_rate)?;

    let fee = insurance_fee(down_payment, asking_price)?;
    let principal = asking_price
        .checked_sub(down_payment)
        .and_then(|p| p.checked_add(fee))
        .ok_or_else(|| CalculatorError::computation("principal overflow"))?;

    let payment = principal
        .checked_mul(factor)
        .ok_or_else(|| CalculatorError::computation("payment overflow"))?
        .round_half_up(AMOUNT_DP);

    debug!(%principal, %fee, %payment, "computed payment amount");

    Ok(payment)
}

/// largest principal a periodic payment can service
///
/// no down payment rule and no insurance fee on this path
pub fn compute_principal(
    payment_amount: Money,
    years: i64,
    frequency_label: &str,
    annual_rate: Rate,
) -> Result<Money> {
    let years = validate_schedule(years)?;
    let factor = derive_factor(years, frequency_label, annual_rate)?;

    if factor.is_zero() {
        return Err(CalculatorError::computation("amortization factor is zero"));
    }

    let principal = payment_amount
        .checked_div(factor)
        .ok_or_else(|| CalculatorError::computation("principal overflow"))?
        .round_half_up(AMOUNT_DP);

    debug!(%payment_amount, %principal, "computed maximum mortgage");

    Ok(principal)
}
