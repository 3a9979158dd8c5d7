//! Cart models.

use rust_decimal::Decimal;

use crate::backend::Product;

/// Fixed delivery surcharge applied whenever the cart is non-empty.
#[must_use]
pub fn delivery_fee() -> Decimal {
    Decimal::new(499, 2)
}

/// One distinct product entry in the cart with an aggregated quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Product title; unique within the cart and used as the merge key.
    pub title: String,

    /// Unit price carried over from the catalog.
    pub price: Decimal,

    /// Backend identifier of the product, when the catalog exposes one.
    pub product_id: Option<String>,

    /// Units of this product; always at least one.
    pub quantity: u32,
}

/// Totals derived from the current cart contents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    /// Sum of `price * quantity` over all lines.
    pub subtotal: Decimal,

    /// [`delivery_fee`] for a non-empty cart, zero otherwise.
    pub delivery_fee: Decimal,

    /// `subtotal + delivery_fee`.
    pub total: Decimal,
}

/// Insertion-ordered collection of cart lines, keyed by product title.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// A line already carrying the product's title has its quantity
    /// incremented; otherwise a new line is appended with quantity one.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.title == product.title)
        {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine {
            title: product.title.clone(),
            price: product.price,
            product_id: product.id.clone(),
            quantity: 1,
        });
    }

    /// Replace the quantity of the line carrying `title`.
    ///
    /// Callers are responsible for keeping quantities at one or above; an
    /// unknown title is silently ignored.
    pub fn set_quantity(&mut self, title: &str, quantity: u32) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.title == title) {
            line.quantity = quantity;
        }
    }

    /// Compute subtotal, delivery fee and total for the current contents.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let subtotal: Decimal = self
            .lines
            .iter()
            .map(|line| line.price * Decimal::from(line.quantity))
            .sum();

        let delivery_fee = if self.lines.is_empty() {
            Decimal::ZERO
        } else {
            delivery_fee()
        };

        CartTotals {
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Look up the line carrying `title`.
    #[must_use]
    pub fn line(&self, title: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.title == title)
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
