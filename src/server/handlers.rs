//! Request handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculator::MortgageCalculator;
use crate::decimal::{Money, Rate};
use crate::errors::CalculatorError;
use crate::types::{LoanQuery, PaymentQuery};

/// Application state.
pub struct AppState {
    /// The calculation engine, owner of the shared interest rate
    pub calculator: Arc<MortgageCalculator>,
}

/// Errors surfaced to clients as 400 responses with a plain-text reason.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("missing query parameter: {0}")]
    MissingParameter(&'static str),

    #[error(transparent)]
    Calculator(#[from] CalculatorError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        warn!(error = %message, "request rejected");
        (StatusCode::BAD_REQUEST, message).into_response()
    }
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Query string of `GET /payment-amount`.
#[derive(Debug, Deserialize)]
pub struct PaymentAmountQuery {
    #[serde(rename = "Asking_Price")]
    pub asking_price: Option<f64>,
    #[serde(rename = "Down_Payment")]
    pub down_payment: Option<f64>,
    #[serde(rename = "Payment_schedule")]
    pub payment_schedule: Option<i64>,
    #[serde(rename = "Amortization_Period")]
    pub amortization_period: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PaymentAmountResponse {
    #[serde(rename = "Payment amount")]
    pub payment_amount: f64,
}

/// Recurring payment for a purchase.
pub async fn payment_amount(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PaymentAmountQuery>,
) -> Result<Json<PaymentAmountResponse>, ApiError> {
    let asking_price = required(query.asking_price, "Asking_Price")?;
    let down_payment = required(query.down_payment, "Down_Payment")?;
    let payment_schedule = required(query.payment_schedule, "Payment_schedule")?;
    let amortization_period = required(query.amortization_period, "Amortization_Period")?;

    let loan = LoanQuery::new(
        money("asking price", asking_price)?,
        money("down payment", down_payment)?,
        payment_schedule,
        amortization_period,
    )?;

    let payment = state.calculator.payment_amount(&loan)?;

    Ok(Json(PaymentAmountResponse {
        payment_amount: payment.to_f64(),
    }))
}

/// Query string of `GET /mortgage-amount`.
#[derive(Debug, Deserialize)]
pub struct MortgageAmountQuery {
    pub payment_amount: Option<f64>,
    #[serde(rename = "Payment_schedule")]
    pub payment_schedule: Option<i64>,
    #[serde(rename = "Amortization_Period")]
    pub amortization_period: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MortgageAmountResponse {
    #[serde(rename = "Maximum Mortgage")]
    pub maximum_mortgage: f64,
}

/// Maximum principal a recurring payment can service.
pub async fn mortgage_amount(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MortgageAmountQuery>,
) -> Result<Json<MortgageAmountResponse>, ApiError> {
    let payment_amount = required(query.payment_amount, "payment_amount")?;
    let payment_schedule = required(query.payment_schedule, "Payment_schedule")?;
    let amortization_period = required(query.amortization_period, "Amortization_Period")?;

    let budget = PaymentQuery::new(
        money("payment amount", payment_amount)?,
        payment_schedule,
        amortization_period,
    )?;

    let principal = state.calculator.maximum_mortgage(&budget)?;

    Ok(Json(MortgageAmountResponse {
        maximum_mortgage: principal.to_f64(),
    }))
}

/// Body of `PATCH /interest-rate`.
#[derive(Debug, Deserialize)]
pub struct RateUpdateRequest {
    #[serde(rename = "Interest Rate")]
    pub interest_rate: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct RateUpdateResponse {
    #[serde(rename = "Old interest rate")]
    pub old_rate: f64,
    #[serde(rename = "New interest rate")]
    pub new_rate: f64,
}

/// Swap the shared annual interest rate.
pub async fn set_interest_rate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RateUpdateRequest>,
) -> Result<Json<RateUpdateResponse>, ApiError> {
    let new_rate = request
        .interest_rate
        .map(|value| {
            Rate::try_from_f64(value).ok_or_else(|| CalculatorError::InvalidAmount {
                field: "interest rate",
                message: format!("{} is not a representable rate", value),
            })
        })
        .transpose()?;

    let change = state.calculator.set_rate(new_rate)?;

    Ok(Json(RateUpdateResponse {
        old_rate: change.old_rate.to_f64(),
        new_rate: change.new_rate.to_f64(),
    }))
}

#[derive(Debug, Serialize)]
pub struct InterestRateResponse {
    #[serde(rename = "Interest Rate")]
    pub interest_rate: f64,
}

/// Current annual interest rate.
pub async fn get_interest_rate(State(state): State<Arc<AppState>>) -> Json<InterestRateResponse> {
    Json(InterestRateResponse {
        interest_rate: state.calculator.current_rate().to_f64(),
    })
}

fn required<T>(value: Option<T>, name: &'static str) -> Result<T, ApiError> {
    value.ok_or(ApiError::MissingParameter(name))
}

fn money(field: &'static str, value: f64) -> Result<Money, ApiError> {
    Money::try_from_f64(value).ok_or_else(|| {
        CalculatorError::InvalidAmount {
            field,
            message: format!("{} is not a representable amount", value),
        }
        .into()
    })
}
