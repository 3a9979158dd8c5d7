//! Store API Config

use clap::Args;
use tienda_app::backend::StoreApiConfig;

/// Store API connection settings.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// Store API base URL
    #[arg(long, env = "STORE_API_URL", default_value = "http://localhost:5000")]
    pub base_url: String,
}

impl ApiConfig {
    /// Client configuration for the store API.
    #[must_use]
    pub fn client_config(&self) -> StoreApiConfig {
        StoreApiConfig {
            base_url: self.base_url.clone(),
        }
    }
}
