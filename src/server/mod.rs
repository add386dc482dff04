//! REST surface of the calculator.
//!
//! - `GET /payment-amount` and `GET /mortgage-amount` for calculations
//! - `GET`/`PATCH /interest-rate` for the shared annual rate
//! - `GET /health`

pub mod handlers;
pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::calculator::MortgageCalculator;
use crate::config::ServerConfig;

/// The calculator server.
pub struct Server {
    config: ServerConfig,
    calculator: Arc<MortgageCalculator>,
}

impl Server {
    /// Create a server with a calculator built from the configuration.
    pub fn new(config: ServerConfig) -> Self {
        let calculator = Arc::new(MortgageCalculator::new(config.calculator.clone()));
        Self { config, calculator }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.calculator.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!(
            "Starting mortgage calculator on {} at {} annual rate",
            addr,
            self.calculator.current_rate()
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
