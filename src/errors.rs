use thiserror::Error;

use crate::decimal::Money;
use crate::types::{MAX_SCHEDULE_YEARS, MIN_SCHEDULE_YEARS};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("invalid payment schedule: {years} years, must be between {} and {}", MIN_SCHEDULE_YEARS, MAX_SCHEDULE_YEARS)]
    InvalidSchedule {
        years: i64,
    },

    #[error("invalid down payment: {down_payment} on asking price {asking_price} is below the required minimum")]
    InvalidDownPayment {
        down_payment: Money,
        asking_price: Money,
    },

    #[error("invalid amortization period: {label:?}, expected weekly, biweekly or monthly")]
    InvalidFrequency {
        label: String,
    },

    #[error("calculation error: {message}")]
    ComputationFailure {
        message: String,
    },

    #[error("Fail to get new rate")]
    MissingRate,

    #[error("invalid {field}: {message}")]
    InvalidAmount {
        field: &'static str,
        message: String,
    },
}

impl CalculatorError {
    pub(crate) fn computation(message: impl Into<String>) -> Self {
        CalculatorError::ComputationFailure {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
