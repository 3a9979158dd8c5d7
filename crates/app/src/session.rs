//! Storefront session.

use std::fmt;
use std::sync::Arc;

use crate::{
    backend::StoreBackend,
    domain::{
        cart::{Cart, CartLine},
        catalog::CatalogView,
        checkout::{CheckoutError, CheckoutFlow, CheckoutState},
    },
    identity::IdentityProvider,
};

/// One visitor's storefront: the catalog they see, the cart they build and
/// the checkout they drive.
///
/// The session is owned by a single task; the backend and identity
/// collaborators are the only shared pieces, so no locking is involved.
pub struct StoreSession {
    backend: Arc<dyn StoreBackend>,
    identity: Arc<dyn IdentityProvider>,

    /// Catalog as last fetched.
    pub catalog: CatalogView,

    /// Cart under construction.
    pub cart: Cart,

    /// Checkout state machine.
    pub checkout: CheckoutFlow,
}

impl fmt::Debug for StoreSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreSession")
            .field("catalog", &self.catalog)
            .field("cart", &self.cart)
            .field("checkout", &self.checkout)
            .finish_non_exhaustive()
    }
}

impl StoreSession {
    /// Create a session with an empty cart over the given collaborators.
    #[must_use]
    pub fn new(backend: Arc<dyn StoreBackend>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            backend,
            identity,
            catalog: CatalogView::new(),
            cart: Cart::new(),
            checkout: CheckoutFlow::new(),
        }
    }

    /// Fetch the catalog for `category`, replacing the loaded products.
    ///
    /// Responses superseded by a newer refresh are dropped; a failed fetch
    /// degrades to an empty catalog and a warning.
    pub async fn refresh_catalog(&mut self, category: Option<String>) {
        let epoch = self.catalog.begin_refresh(category.clone());
        let outcome = self.backend.fetch_products(category).await;

        self.catalog.apply(epoch, outcome);
    }

    /// Add one unit of the loaded product carrying `title` to the cart.
    ///
    /// Returns the affected line, or `None` when no such product is loaded.
    pub fn add_to_cart(&mut self, title: &str) -> Option<&CartLine> {
        let product = self.catalog.product(title)?.clone();

        self.cart.add(&product);
        self.cart.line(&product.title)
    }

    /// Replace the quantity of the cart line carrying `title`.
    ///
    /// Callers are responsible for keeping quantities at one or above; an
    /// unknown title is silently ignored.
    pub fn set_quantity(&mut self, title: &str, quantity: u32) {
        self.cart.set_quantity(title, quantity);
    }

    /// Submit the current cart as an order.
    ///
    /// On success the cart is cleared; on failure it is preserved so the
    /// user can retry.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckoutError`] when the cart is empty or a submission
    /// is already in flight; no request leaves the process in either case.
    pub async fn submit_order(&mut self) -> Result<&CheckoutState, CheckoutError> {
        let request = self.checkout.begin(&self.cart, self.identity.customer())?;
        let outcome = self.backend.create_order(request).await;
        let state = self.checkout.complete(outcome);

        if matches!(state, CheckoutState::Success { .. }) {
            self.cart.clear();
        }

        Ok(self.checkout.state())
    }

    /// Clear an expired checkout notice, if one is showing.
    ///
    /// Notice timers are fire-and-forget, so this is safe to call from any
    /// number of overlapping timers.
    pub fn expire_notice(&mut self) -> bool {
        self.checkout.expire_notice()
    }
}
