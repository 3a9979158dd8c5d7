//! Checkout state machine.

use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::{
    backend::{BackendError, OrderReceipt, OrderRequest},
    domain::{cart::Cart, orders},
    identity::CustomerIdentity,
};

/// How long a terminal checkout notice stays visible before the flow
/// returns to idle.
pub const NOTICE_TTL: Duration = Duration::from_millis(3000);

/// Where a checkout currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckoutState {
    /// No submission in flight and nothing to display.
    #[default]
    Idle,

    /// An order request has been sent and no outcome has arrived yet.
    Submitting,

    /// The backend accepted the order.
    Success {
        /// Identifier of the created order, shown to the user.
        order_id: String,
    },

    /// The submission failed; the cart is preserved for a retry.
    Failure,
}

/// Reasons a checkout cannot start.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// The cart holds no lines; nothing to order.
    #[error("the cart is empty")]
    EmptyCart,

    /// A previous submission has not settled yet.
    #[error("an order submission is already in flight")]
    SubmissionInFlight,
}

/// Drives a cart through `Idle → Submitting → (Success | Failure) → Idle`.
#[derive(Debug, Default)]
pub struct CheckoutFlow {
    state: CheckoutState,
}

impl CheckoutFlow {
    /// Create a flow in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &CheckoutState {
        &self.state
    }

    /// Start a submission by snapshotting `cart` into an order request.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] for an empty cart and
    /// [`CheckoutError::SubmissionInFlight`] while a previous submission
    /// has not settled; neither sends anything to the backend.
    pub fn begin(
        &mut self,
        cart: &Cart,
        customer: CustomerIdentity,
    ) -> Result<OrderRequest, CheckoutError> {
        if matches!(self.state, CheckoutState::Submitting) {
            return Err(CheckoutError::SubmissionInFlight);
        }

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.state = CheckoutState::Submitting;

        Ok(orders::build_order_request(cart, customer))
    }

    /// Record the outcome of the submission started by [`Self::begin`].
    ///
    /// Transport errors, rejected statuses and undecodable bodies all land
    /// in [`CheckoutState::Failure`].
    pub fn complete(&mut self, outcome: Result<OrderReceipt, BackendError>) -> &CheckoutState {
        self.state = match outcome {
            Ok(receipt) => CheckoutState::Success {
                order_id: receipt.order_id,
            },
            Err(error) => {
                warn!("order submission failed: {error}");
                CheckoutState::Failure
            }
        };

        &self.state
    }

    /// Clear a terminal notice, returning the flow to idle.
    ///
    /// Notice timers are fire-and-forget and never cancelled; a timer
    /// firing while a newer submission is in flight is ignored, and any
    /// timer firing in a terminal state clears it, so the last to fire
    /// wins. Returns whether a notice was cleared.
    pub fn expire_notice(&mut self) -> bool {
        match self.state {
            CheckoutState::Success { .. } | CheckoutState::Failure => {
                self.state = CheckoutState::Idle;
                true
            }
            CheckoutState::Idle | CheckoutState::Submitting => false,
        }
    }
}
