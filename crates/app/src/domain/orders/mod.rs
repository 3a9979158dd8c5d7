//! Order assembly.

use rust_decimal::Decimal;

use crate::{
    backend::{OrderItem, OrderRequest},
    domain::cart::Cart,
    identity::CustomerIdentity,
};

/// Status the backend expects on a freshly submitted order.
const PENDING_STATUS: &str = "pending";

/// Snapshot `cart` into the order body the store API accepts.
///
/// The request's `total` is deliberately zero: the backend recomputes the
/// persisted total rather than trusting the client's arithmetic.
#[must_use]
pub fn build_order_request(cart: &Cart, customer: CustomerIdentity) -> OrderRequest {
    let totals = cart.totals();

    OrderRequest {
        customer,
        items: cart
            .lines()
            .iter()
            .map(|line| OrderItem {
                product_id: line.product_id.clone(),
                title: line.title.clone(),
                price: line.price,
                quantity: line.quantity,
            })
            .collect(),
        subtotal: totals.subtotal,
        delivery_fee: totals.delivery_fee,
        total: Decimal::ZERO,
        status: PENDING_STATUS.to_string(),
    }
}
