//! Storefront configuration module

use clap::Parser;

use crate::config::{api::ApiConfig, observability::LoggingConfig};

pub(crate) mod api;
pub(crate) mod observability;

/// Tienda storefront configuration
#[derive(Debug, Parser)]
#[command(name = "tienda", about = "Tienda storefront", long_about = None)]
pub struct ShopConfig {
    /// Store API settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl ShopConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
