//! Trolley Core - Domain types and logic.
//!
//! This crate provides the retailer-independent pieces shared by the other
//! Trolley components:
//! - `store` - Persistent shopping-list storage
//! - `feed` - Promotions feed client
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! network clients, no storage backends. This keeps it lightweight and
//! allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for prices and list ids
//! - [`category`] - Keyword-based product categorizer
//! - [`product`] - Feed product records
//! - [`list`] - Shopping lists and line items
//! - [`totals`] - Price and savings aggregation
//! - [`filter`] - Search and category filtering
//! - [`export`] - Plain-text list export

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod category;
pub mod export;
pub mod filter;
pub mod list;
pub mod product;
pub mod totals;
pub mod types;

pub use category::{Category, categorize};
pub use list::{ListItem, ShoppingList};
pub use product::Product;
pub use types::*;

/// Storage tag recorded on every persisted list.
pub const RETAILER: &str = "pnp";

/// Human-readable retailer name used in headers and exports.
pub const RETAILER_DISPLAY: &str = "Pick n Pay";
