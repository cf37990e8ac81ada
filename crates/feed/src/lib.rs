//! Trolley Feed - Promotions feed client.
//!
//! The feed is a single JSON array of raw product records scraped from
//! the retailer's promotions page. Field names are fixed strings agreed
//! with the feed provider (they are scraped CSS class names and worse)
//! and are mapped to clean domain fields here. Each fetched product is
//! decorated with a derived category.
//!
//! One request, no retry, no partial results: any network failure or
//! non-success status surfaces as a single [`FeedError`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use trolley_core::categorize;
use trolley_core::product::Product;

/// Default promotions endpoint of the local feed service.
pub const DEFAULT_FEED_URL: &str = "http://127.0.0.1:5001/api/promotions";

/// Errors that can occur when fetching the feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned a non-success status.
    #[error("feed error: status {status}")]
    Status { status: u16 },
}

/// A raw product record exactly as the feed serves it.
///
/// The name field carries the scraped CSS class of the product grid; the
/// promotion badge rides in an `ng-star-inserted` artifact. Do not
/// rename these without the feed provider.
#[derive(Debug, Deserialize)]
struct RawProduct {
    #[serde(rename = "product-grid-item__info-container__name")]
    name: String,
    price: String,
    #[serde(default)]
    old: Option<String>,
    #[serde(default, rename = "src")]
    image_url: Option<String>,
    #[serde(default, rename = "ng-star-inserted")]
    promotion: Option<String>,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        let category = categorize(&raw.name);
        Self {
            name: raw.name,
            price: raw.price,
            old: raw.old,
            image_url: raw.image_url,
            promotion: raw.promotion,
            category,
        }
    }
}

/// Client for the promotions feed endpoint.
#[derive(Debug, Clone)]
pub struct FeedClient {
    client: reqwest::Client,
    url: Url,
}

impl FeedClient {
    /// Create a client for the given promotions endpoint.
    #[must_use]
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Fetch the promotions feed and decorate each product with its
    /// derived category.
    ///
    /// # Errors
    ///
    /// Returns `FeedError` on network failure, a non-success status, or
    /// a body that is not the expected JSON array.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, FeedError> {
        let response = self.client.get(self.url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let raw: Vec<RawProduct> = response.json().await?;
        tracing::debug!(count = raw.len(), "Fetched promotions feed");
        Ok(raw.into_iter().map(Product::from).collect())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_record_field_mapping() {
        let json = r#"{
            "src": "https://img.example/milk.jpg",
            "product-grid-item__info-container__name": "Full Cream Milk 1L",
            "price": "R18.99",
            "old": "R24.99",
            "ng-star-inserted": "Save R6"
        }"#;
        let raw: RawProduct = serde_json::from_str(json).unwrap();
        let product = Product::from(raw);
        assert_eq!(product.name, "Full Cream Milk 1L");
        assert_eq!(product.price, "R18.99");
        assert_eq!(product.old.as_deref(), Some("R24.99"));
        assert_eq!(product.image_url.as_deref(), Some("https://img.example/milk.jpg"));
        assert_eq!(product.promotion.as_deref(), Some("Save R6"));
        assert_eq!(product.category.as_str(), "Fresh Food/Dairy");
    }

    #[test]
    fn test_optional_fields_may_be_absent_or_null() {
        let json = r#"{
            "product-grid-item__info-container__name": "Garden Gnome",
            "price": "R99.99",
            "old": null
        }"#;
        let raw: RawProduct = serde_json::from_str(json).unwrap();
        let product = Product::from(raw);
        assert_eq!(product.old, None);
        assert_eq!(product.image_url, None);
        assert_eq!(product.promotion, None);
        assert_eq!(product.category.as_str(), "Other/Miscellaneous");
    }

    #[test]
    fn test_feed_array_parses() {
        let json = r#"[
            {"product-grid-item__info-container__name": "Instant Coffee", "price": "R89.99"},
            {"product-grid-item__info-container__name": "Salted Chips", "price": "R15.99"}
        ]"#;
        let raw: Vec<RawProduct> = serde_json::from_str(json).unwrap();
        let products: Vec<Product> = raw.into_iter().map(Product::from).collect();
        assert_eq!(products.len(), 2);
        assert_eq!(products.first().map(|p| p.category.as_str()), Some("Beverages/Coffee"));
    }
}
