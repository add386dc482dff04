use std::sync::{Mutex, MutexGuard};

use rust_decimal_macros::dec;
use tracing::info;

use crate::decimal::Rate;
use crate::errors::{CalculatorError, Result};

/// annual rate the service starts with
pub const DEFAULT_ANNUAL_RATE: Rate = Rate::from_decimal(dec!(0.025));

/// outcome of a single rate swap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateChange {
    pub old_rate: Rate,
    pub new_rate: Rate,
}

/// process-wide annual interest rate
///
/// reads and swaps go through one lock, so concurrent updates each observe the
/// value they replaced
#[derive(Debug)]
pub struct InterestRateState {
    current: Mutex<Rate>,
}

impl InterestRateState {
    pub fn new(initial: Rate) -> Self {
        Self {
            current: Mutex::new(initial),
        }
    }

    /// current annual rate
    pub fn current(&self) -> Rate {
        *self.lock()
    }

    /// replace the rate, returning the previous and the new value
    pub fn swap(&self, new_rate: Rate) -> RateChange {
        let mut current = self.lock();
        let old_rate = std::mem::replace(&mut *current, new_rate);
        RateChange { old_rate, new_rate }
    }

    /// rate update as received from a request, no value leaves the state untouched
    ///
    /// the new value is not range checked, a zero rate makes later factor
    /// derivations fail
    pub fn set_rate(&self, new_rate: Option<Rate>) -> Result<RateChange> {
        let new_rate = new_rate.ok_or(CalculatorError::MissingRate)?;
        let change = self.swap(new_rate);
        info!(old_rate = %change.old_rate, new_rate = %change.new_rate, "interest rate updated");
        Ok(change)
    }

    // the guarded value is a plain Copy rate, a poisoned lock still holds a whole one
    fn lock(&self) -> MutexGuard<'_, Rate> {
        self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for InterestRateState {
    fn default() -> Self {
        Self::new(DEFAULT_ANNUAL_RATE)
    }
}
