//! Route definitions.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::calculator::MortgageCalculator;

use super::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `calculator` - The calculation engine shared by every handler
pub fn create_router(calculator: Arc<MortgageCalculator>) -> Router {
    let state = Arc::new(AppState { calculator });

    Router::new()
        .route("/health", get(handlers::health))
        .route("/payment-amount", get(handlers::payment_amount))
        .route("/mortgage-amount", get(handlers::mortgage_amount))
        .route(
            "/interest-rate",
            get(handlers::get_interest_rate).patch(handlers::set_interest_rate),
        )
        .with_state(state)
}
