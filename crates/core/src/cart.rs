//! Cart and line-item domain model.
//!
//! The cart is an ordered list of line items, one per product; ordering is
//! first-add order. The model is pure - persistence lives with the caller,
//! which is expected to save after every mutation.
//!
//! The serialized form is a bare JSON array of line items with camelCase
//! keys, matching the snapshot shape the storefront has always stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// One product-and-quantity entry within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// An ordered sequence of line items, at most one per product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add one unit of a product.
    ///
    /// Merges by product ID only: an existing line has its quantity
    /// incremented and keeps its stored name and price; otherwise a new
    /// line with quantity 1 is appended.
    pub fn add_item(&mut self, product_id: ProductId, name: &str, price: Decimal) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity += 1;
        } else {
            self.items.push(LineItem {
                product_id,
                name: name.to_string(),
                price,
                quantity: 1,
            });
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// The line items, in first-add order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
