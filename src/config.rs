//! Configuration management for the video store server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

use crate::models::{RateCard, BASIC, PREMIUM};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

/// Rental rates and the currency invoices are labelled with
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PricingConfig {
    pub premium: u64,
    pub basic: u64,
    pub currency: String,
    pub monetary_unit: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // e.g. VIDEOSTORE_PRICING__MONETARY_UNIT
            .add_source(
                Environment::with_prefix("VIDEOSTORE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl PricingConfig {
    pub fn rate_card(&self) -> RateCard {
        RateCard::new(self.premium, self.basic)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            premium: PREMIUM,
            basic: BASIC,
            currency: "SEK".to_string(),
            monetary_unit: "Kr".to_string(),
        }
    }
}
