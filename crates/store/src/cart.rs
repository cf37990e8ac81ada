//! The single in-progress shopping cart.
//!
//! The cart is a bare item array persisted under a fixed key in the same
//! store as the saved lists. That key never enumerates as a saved list:
//! an item array is not a list record and the scan in
//! [`crate::lists::ListStore::all`] rejects it.

use thiserror::Error;

use trolley_core::list::ListItem;
use trolley_core::product::Product;

use crate::storage::{Storage, StorageError};

/// Fixed storage key for the in-progress cart.
pub const CART_KEY: &str = "pnp-shopping-list";

/// Errors that can occur in cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Backend read or write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// The persisted cart could not be parsed.
    #[error("corrupt cart data: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Persistence for the in-progress cart.
pub struct CartStore<S> {
    storage: S,
}

impl<S: Storage> CartStore<S> {
    /// Create a cart store over a storage backend.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the cart; an absent entry is an empty cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the backend cannot be read or the stored
    /// cart is corrupt.
    pub fn load(&self) -> Result<Vec<ListItem>, CartError> {
        match self.storage.get(CART_KEY)? {
            Some(value) => Ok(serde_json::from_str(&value)?),
            None => Ok(Vec::new()),
        }
    }

    /// Persist the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the backend cannot be written.
    pub fn save(&self, items: &[ListItem]) -> Result<(), CartError> {
        let json = serde_json::to_string(items)?;
        self.storage.set(CART_KEY, &json)?;
        Ok(())
    }

    /// Add a product to the cart with quantity 1.
    ///
    /// Adding a product whose id is already in the cart is a no-op;
    /// returns whether the cart changed.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart cannot be loaded or saved.
    pub fn add(&self, product: &Product) -> Result<bool, CartError> {
        let mut items = self.load()?;
        if items.iter().any(|item| item.id == product.name) {
            return Ok(false);
        }
        items.push(ListItem::from_product(product));
        self.save(&items)?;
        Ok(true)
    }

    /// Remove the item with the given id; returns whether it was there.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart cannot be loaded or saved.
    pub fn remove(&self, item_id: &str) -> Result<bool, CartError> {
        let mut items = self.load()?;
        let before = items.len();
        items.retain(|item| item.id != item_id);
        let removed = items.len() != before;
        if removed {
            self.save(&items)?;
        }
        Ok(removed)
    }

    /// Set an item's quantity, floored at 1; returns whether the item
    /// was found.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the cart cannot be loaded or saved.
    pub fn set_quantity(&self, item_id: &str, quantity: u32) -> Result<bool, CartError> {
        let mut items = self.load()?;
        let Some(item) = items.iter_mut().find(|item| item.id == item_id) else {
            return Ok(false);
        };
        item.quantity = quantity.max(1);
        self.save(&items)?;
        Ok(true)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError` if the backend cannot be written.
    pub fn clear(&self) -> Result<(), CartError> {
        self.storage.remove(CART_KEY)?;
        Ok(())
    }
}
