use std::fmt;
use std::str::FromStr;

use crate::decimal::Money;
use crate::errors::{CalculatorError, Result};

/// shortest accepted payment schedule, in years
pub const MIN_SCHEDULE_YEARS: u32 = 5;

/// longest accepted payment schedule, in years
pub const MAX_SCHEDULE_YEARS: u32 = 25;

/// how often payments are made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentFrequency {
    Weekly,
    Biweekly,
    Monthly,
}

impl PaymentFrequency {
    pub const ALL: [PaymentFrequency; 3] = [
        PaymentFrequency::Weekly,
        PaymentFrequency::Biweekly,
        PaymentFrequency::Monthly,
    ];

    /// compounding sub-periods per month
    pub fn periods_per_month(&self) -> u32 {
        match self {
            PaymentFrequency::Weekly => 4,
            PaymentFrequency::Biweekly => 2,
            PaymentFrequency::Monthly => 1,
        }
    }

    /// compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        12 * self.periods_per_month()
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentFrequency::Weekly => "weekly",
            PaymentFrequency::Biweekly => "biweekly",
            PaymentFrequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaymentFrequency {
    type Err = CalculatorError;

    /// case-insensitive match against the closed label set
    fn from_str(s: &str) -> Result<Self> {
        PaymentFrequency::ALL
            .into_iter()
            .find(|frequency| frequency.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CalculatorError::InvalidFrequency {
                label: s.to_string(),
            })
    }
}

/// check a payment schedule against the accepted range
pub fn validate_schedule(years: i64) -> Result<u32> {
    u32::try_from(years)
        .ok()
        .filter(|y| (MIN_SCHEDULE_YEARS..=MAX_SCHEDULE_YEARS).contains(y))
        .ok_or(CalculatorError::InvalidSchedule { years })
}

/// loan parameters of a single calculation request
#[derive(Debug, Clone, PartialEq)]
pub struct LoanQuery {
    pub asking_price: Money,
    pub down_payment: Money,
    pub payment_schedule_years: i64,
    /// raw frequency label, parsed only once the schedule and down payment pass
    pub amortization_period: String,
}

impl LoanQuery {
    pub fn new(
        asking_price: Money,
        down_payment: Money,
        payment_schedule_years: i64,
        amortization_period: impl Into<String>,
    ) -> Result<Self> {
        if !asking_price.is_positive() {
            return Err(CalculatorError::InvalidAmount {
                field: "asking price",
                message: format!("{} must be positive", asking_price),
            });
        }

        if down_payment.is_negative() {
            return Err(CalculatorError::InvalidAmount {
                field: "down payment",
                message: format!("{} must not be negative", down_payment),
            });
        }

        Ok(Self {
            asking_price,
            down_payment,
            payment_schedule_years,
            amortization_period: amortization_period.into(),
        })
    }
}

/// parameters of a maximum mortgage request
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentQuery {
    pub payment_amount: Money,
    pub payment_schedule_years: i64,
    pub amortization_period: String,
}

impl PaymentQuery {
    pub fn new(
        payment_amount: Money,
        payment_schedule_years: i64,
        amortization_period: impl Into<String>,
    ) -> Result<Self> {
        if payment_amount.is_negative() {
            return Err(CalculatorError::InvalidAmount {
                field: "payment amount",
                message: format!("{} must not be negative", payment_amount),
            });
        }

        Ok(Self {
            payment_amount,
            payment_schedule_years,
            amortization_period: amortization_period.into(),
        })
    }
}
