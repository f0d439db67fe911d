//! Catalog API response types.
//!
//! Every response is wrapped in a `{success, data}` envelope. Listing
//! payloads arrive in one of two shapes depending on the endpoint: a flat
//! array, or a page object exposing a `content` field.

use rust_decimal::Decimal;
use serde::Deserialize;

use shopfront_core::{CategoryId, ProductId};

/// The `{success, data}` wrapper used by every API response.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
}

/// Listing payload: a flat array or a page object with `content`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Flat(Vec<T>),
    Paged { content: Vec<T> },
}

impl<T> Listing<T> {
    /// Unwrap either shape into the item sequence.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Flat(items) => items,
            Self::Paged { content } => content,
        }
    }
}

/// A product category. Read-only, sourced from the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub product_count: Option<u64>,
}

/// A product snapshot. Read-only, sourced from the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub sale_price: Option<Decimal>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stock_quantity: Option<i64>,
    #[serde(default)]
    pub average_rating: Option<Decimal>,
    #[serde(default)]
    pub review_count: Option<u64>,
    #[serde(default)]
    pub main_image_url: Option<String>,
}
