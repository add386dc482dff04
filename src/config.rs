use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::state::DEFAULT_ANNUAL_RATE;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// annual nominal rate in effect until the first update
    #[serde(default = "default_interest_rate")]
    pub initial_interest_rate: Rate,
}

fn default_interest_rate() -> Rate {
    DEFAULT_ANNUAL_RATE
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            initial_interest_rate: default_interest_rate(),
        }
    }
}

/// server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub calculator: CalculatorConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            calculator: CalculatorConfig::default(),
        }
    }
}

impl ServerConfig {
    /// load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, std::io::Error> {
        toml::from_str(content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.calculator.initial_interest_rate, Rate::from_decimal(dec!(0.025)));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ServerConfig::from_toml("").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config = ServerConfig::from_toml(
            r#"
            host = "127.0.0.1"
            port = 9000

            [calculator]
            initial_interest_rate = "0.031"
            "#,
        )
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.calculator.initial_interest_rate, Rate::from_decimal(dec!(0.031)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ServerConfig::from_toml("port = \"not a number\"").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_missing_file() {
        assert!(ServerConfig::from_file("does/not/exist.toml").is_err());
    }
}
