use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::payments::{compute_payment, compute_principal};
use crate::state::{InterestRateState, RateChange};
use crate::types::{LoanQuery, PaymentQuery};

/// mortgage calculation engine bound to the shared interest rate
///
/// every calculation reads the rate once when it starts; a concurrent update may
/// land in between and only affects later calculations
#[derive(Debug, Default)]
pub struct MortgageCalculator {
    rates: InterestRateState,
}

impl MortgageCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            rates: InterestRateState::new(config.initial_interest_rate),
        }
    }

    /// periodic payment for the query's purchase, insurance fee included
    pub fn payment_amount(&self, query: &LoanQuery) -> Result<Money> {
        compute_payment(
            query.asking_price,
            query.down_payment,
            query.payment_schedule_years,
            &query.amortization_period,
            self.current_rate(),
        )
    }

    /// maximum mortgage a periodic payment services
    pub fn maximum_mortgage(&self, query: &PaymentQuery) -> Result<Money> {
        compute_principal(
            query.payment_amount,
            query.payment_schedule_years,
            &query.amortization_period,
            self.current_rate(),
        )
    }

    pub fn current_rate(&self) -> Rate {
        self.rates.current()
    }

    pub fn set_rate(&self, new_rate: Option<Rate>) -> Result<RateChange> {
        self.rates.set_rate(new_rate)
    }
}
