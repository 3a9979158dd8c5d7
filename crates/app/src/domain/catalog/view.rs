//! Catalog view-model.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::backend::{BackendError, Product};

/// Products currently visible to the session, plus the state of the fetch
/// that produced them.
#[derive(Debug, Default)]
pub struct CatalogView {
    products: Vec<Product>,
    category: Option<String>,
    loading: bool,
    epoch: u64,
}

impl CatalogView {
    /// Create an empty view with no fetch in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Note that a fetch for `category` is starting.
    ///
    /// Returns the refresh epoch to hand back to [`Self::apply`]; a refresh
    /// started later supersedes this one, and its response will be dropped.
    pub fn begin_refresh(&mut self, category: Option<String>) -> u64 {
        self.epoch += 1;
        self.loading = true;
        self.category = category;

        self.epoch
    }

    /// Apply the outcome of the fetch started at `epoch`.
    ///
    /// A failed fetch degrades to an empty catalog and a warning; the user
    /// re-triggers by changing the filter. Returns `false` when the
    /// response arrived from a superseded refresh and was ignored.
    pub fn apply(&mut self, epoch: u64, outcome: Result<Vec<Product>, BackendError>) -> bool {
        if epoch != self.epoch {
            debug!("dropping catalog response from superseded refresh {epoch}");
            return false;
        }

        self.loading = false;

        match outcome {
            Ok(products) => self.products = products,
            Err(error) => {
                warn!("catalog fetch failed: {error}");
                self.products.clear();
            }
        }

        true
    }

    /// Loaded products, in backend order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a loaded product by title.
    #[must_use]
    pub fn product(&self, title: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.title == title)
    }

    /// Active category filter.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Whether a fetch has not settled yet.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Distinct categories of the loaded products, in order of first
    /// appearance.
    ///
    /// Filter options reflect only what is currently loaded, so with a
    /// filter active this is the filtered list's categories.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen = FxHashSet::default();

        self.products
            .iter()
            .filter(|product| seen.insert(product.category.as_str()))
            .map(|product| product.category.clone())
            .collect()
    }
}
