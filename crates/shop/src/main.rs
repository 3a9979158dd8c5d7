//! Tienda storefront

use std::process;
use std::sync::Arc;

use tracing::info;

use tienda_app::{backend::HttpBackend, identity::PlaceholderIdentity, session::StoreSession};

use crate::config::ShopConfig;

mod config;
mod shell;

/// Tienda storefront entry point
///
/// # Panics
///
/// Panics if a global tracing subscriber is already installed.
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ShopConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    config.logging.init_subscriber();

    info!("Using store API at {}", config.api.base_url);

    let backend = HttpBackend::new(config.api.client_config());
    let session = StoreSession::new(Arc::new(backend), Arc::new(PlaceholderIdentity));

    shell::run(session).await;

    info!("Storefront session ended");
}
