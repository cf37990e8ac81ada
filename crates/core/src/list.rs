//! Shopping lists and their line items.
//!
//! The serialized form is camelCase with epoch-millisecond timestamps,
//! matching the records the original browser build wrote to local
//! storage. Only `id`, `name` and `items` are required when reading; the
//! remaining fields default so older or foreign-but-shaped entries still
//! load (an accepted risk of the shared, unnamespaced store).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::RETAILER;
use crate::category::Category;
use crate::product::Product;
use crate::types::{ListId, Price, PriceError};

/// A quantity-bearing reference to a product within a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Item identifier, derived from the product name.
    ///
    /// Two distinct products sharing a name collide here; this mirrors
    /// the original records and is kept for compatibility.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Current price text at the time the item was added.
    pub current_price: String,
    /// Quantity, at least 1.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Derived category.
    pub category: Category,
    /// The originating product record, embedded as a value copy.
    pub original_product: Product,
}

const fn default_quantity() -> u32 {
    1
}

impl ListItem {
    /// Build a line item from a feed product with quantity 1.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.name.clone(),
            title: product.name.clone(),
            current_price: product.price.clone(),
            quantity: 1,
            category: product.category.clone(),
            original_product: product.clone(),
        }
    }

    /// Parse this item's unit price.
    ///
    /// # Errors
    ///
    /// Returns `PriceError` if the price text is malformed.
    pub fn unit_price(&self) -> Result<Price, PriceError> {
        Price::parse(&self.current_price)
    }

    /// Parse the pre-promotion unit price, falling back to the current
    /// price when the product has none.
    ///
    /// # Errors
    ///
    /// Returns `PriceError` if either price text is malformed.
    pub fn old_unit_price(&self) -> Result<Price, PriceError> {
        match &self.original_product.old {
            Some(old) => Price::parse(old),
            None => self.unit_price(),
        }
    }
}

/// A named, persisted collection of shopping items.
///
/// Invariant: `updated_at >= created_at`. Item order is insertion order
/// and survives persistence round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    /// Unique id, doubling as the storage key.
    pub id: ListId,
    /// Display name.
    pub name: String,
    /// Line items in insertion order.
    pub items: Vec<ListItem>,
    /// Creation time.
    #[serde(default = "epoch", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Last mutation time.
    #[serde(default = "epoch", with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
    /// Retailer tag, currently always `"pnp"`.
    #[serde(default = "default_retailer")]
    pub retailer: String,
}

fn epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

fn default_retailer() -> String {
    RETAILER.to_owned()
}
