//! Store API wire models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::identity::CustomerIdentity;

/// Catalog product as served by the store API.
///
/// Products are backend-owned and immutable here; the title doubles as the
/// merge key when a product is added to the cart.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Display title; unique within a catalog.
    pub title: String,

    /// Shelf price in major units.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Short description shown on the product card.
    pub description: String,

    /// Category label used for filtering.
    pub category: String,

    /// Optional image location.
    pub image_url: Option<String>,

    /// Backend record identifier, when the API exposes one.
    #[serde(rename = "_id")]
    pub id: Option<String>,
}

/// One order line in the submission body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderItem {
    /// Backend identifier carried over from the catalog.
    pub product_id: Option<String>,

    /// Product title.
    pub title: String,

    /// Unit price at submission time.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Units ordered.
    pub quantity: u32,
}

/// Order submission body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    /// Customer placing the order.
    pub customer: CustomerIdentity,

    /// Snapshot of the cart lines.
    pub items: Vec<OrderItem>,

    /// Sum of `price * quantity` over the items.
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,

    /// Fixed delivery surcharge.
    #[serde(with = "rust_decimal::serde::float")]
    pub delivery_fee: Decimal,

    /// Always zero on the wire; the backend owns the persisted total.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,

    /// Initial order status, `"pending"`.
    pub status: String,
}

/// Response body of a successful order submission.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderReceipt {
    /// Identifier of the created order.
    pub order_id: String,
}
