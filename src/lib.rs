pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod payments;
pub mod server;
pub mod state;
pub mod types;

// re-export key types
pub use calculator::MortgageCalculator;
pub use config::{CalculatorConfig, ServerConfig};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use payments::{
    compute_payment, compute_principal, derive_factor, factor_for, insurance_fee,
    is_valid_down_payment, minimum_down_payment, InsuranceTier,
};
pub use server::Server;
pub use state::{InterestRateState, RateChange, DEFAULT_ANNUAL_RATE};
pub use types::{LoanQuery, PaymentFrequency, PaymentQuery, MAX_SCHEDULE_YEARS, MIN_SCHEDULE_YEARS};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
