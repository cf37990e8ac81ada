//! Promotional product records.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::types::{Price, PriceError};

/// A promotional product from the retailer feed, decorated with a
/// derived category.
///
/// Prices stay in their original currency-prefixed text form; parse them
/// with [`Product::current_price`] / [`Product::old_price`] when
/// arithmetic is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product name as scraped from the retailer.
    pub name: String,
    /// Current promotional price text (e.g. `"R12.99"`).
    pub price: String,
    /// Pre-promotion price text, when the feed carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old: Option<String>,
    /// Product image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Promotional badge text (e.g. "Buy 2 for R50").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
    /// Derived `"Main/Sub"` category.
    pub category: Category,
}

impl Product {
    /// Parse the current price text.
    ///
    /// # Errors
    ///
    /// Returns `PriceError` if the price text is malformed.
    pub fn current_price(&self) -> Result<Price, PriceError> {
        Price::parse(&self.price)
    }

    /// Parse the pre-promotion price text, falling back to the current
    /// price when the feed has none.
    ///
    /// # Errors
    ///
    /// Returns `PriceError` if either price text is malformed.
    pub fn old_price(&self) -> Result<Price, PriceError> {
        match &self.old {
            Some(old) => Price::parse(old),
            None => self.current_price(),
        }
    }
}
