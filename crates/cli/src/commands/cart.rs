//! In-progress cart commands.
//!
//! The cart is the working list built while browsing promotions. It
//! lives under a fixed key in the same store as the saved lists and can
//! be saved off as a new named list or merged into an existing one.

use thiserror::Error;

use trolley_core::list::ListItem;
use trolley_core::totals::{item_savings, total_price, total_savings};
use trolley_core::types::{ListId, PriceError};
use trolley_feed::{FeedClient, FeedError};
use trolley_store::{CartError, CartStore, FileStorage, ListPatch, ListStore, StorageError, StoreError};

use crate::config::Config;

/// Errors that can occur during cart commands.
#[derive(Debug, Error)]
pub enum CartCommandError {
    /// Data directory could not be opened.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Cart read or write failed.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Saved-list operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Feed could not be fetched.
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// An item carries malformed price text.
    #[error("malformed price in cart: {0}")]
    Price(#[from] PriceError),

    /// User input was rejected; nothing was mutated.
    #[error("{0}")]
    Validation(String),
}

fn cart_store(config: &Config) -> Result<CartStore<FileStorage>, CartCommandError> {
    Ok(CartStore::new(FileStorage::open(&config.data_dir)?))
}

/// Print the cart with line totals and savings.
///
/// # Errors
///
/// Returns `CartCommandError` if the cart cannot be read or a price is
/// malformed.
pub fn show(config: &Config) -> Result<(), CartCommandError> {
    let items = cart_store(config)?.load()?;

    if items.is_empty() {
        println!("Your shopping list is empty");
        return Ok(());
    }

    for item in &items {
        println!("{}", format_item(item)?);
    }
    println!();
    println!("Subtotal ({} items): R{:.2}", items.len(), total_price(&items)?);
    println!("Total Savings: R{:.2}", total_savings(&items)?);
    Ok(())
}

/// Add a feed product to the cart by its exact name.
///
/// # Errors
///
/// Returns `CartCommandError` if the feed cannot be fetched, the name
/// matches no product, or the cart cannot be written.
pub async fn add(config: &Config, name: &str, quantity: u32) -> Result<(), CartCommandError> {
    let client = FeedClient::new(config.feed_url.clone());
    let products = client.fetch_products().await?;

    let product = products
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            CartCommandError::Validation(format!("No product named {name:?} in the feed"))
        })?;

    let cart = cart_store(config)?;
    if cart.add(product)? {
        if quantity > 1 {
            cart.set_quantity(&product.name, quantity)?;
        }
        tracing::info!(name = %product.name, quantity, "Item added to list");
    } else {
        tracing::info!(name = %product.name, "Item is already in the list");
    }
    Ok(())
}

/// Remove an item by product name.
///
/// # Errors
///
/// Returns `CartCommandError` if the cart cannot be read or written.
pub fn remove(config: &Config, name: &str) -> Result<(), CartCommandError> {
    if cart_store(config)?.remove(name)? {
        tracing::info!(name, "Item removed from list");
    } else {
        tracing::info!(name, "Item was not in the list");
    }
    Ok(())
}

/// Set an item's quantity, floored at 1.
///
/// # Errors
///
/// Returns `CartCommandError` if the item is not in the cart or the
/// cart cannot be written.
pub fn set_quantity(config: &Config, name: &str, quantity: u32) -> Result<(), CartCommandError> {
    if !cart_store(config)?.set_quantity(name, quantity)? {
        return Err(CartCommandError::Validation(format!(
            "No item named {name:?} in the cart"
        )));
    }
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns `CartCommandError` if the cart cannot be written.
pub fn clear(config: &Config) -> Result<(), CartCommandError> {
    cart_store(config)?.clear()?;
    tracing::info!("Shopping list cleared");
    Ok(())
}

/// Save the cart as a new named list. The cart itself is left intact.
///
/// # Errors
///
/// Returns `CartCommandError::Validation` if the name is empty; nothing
/// is mutated in that case.
pub fn save_as_list(config: &Config, name: &str) -> Result<(), CartCommandError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CartCommandError::Validation(
            "Please enter a list name".to_owned(),
        ));
    }

    let storage = FileStorage::open(&config.data_dir)?;
    let items = CartStore::new(&storage).load()?;
    let list = ListStore::new(&storage).create(name, items)?;
    tracing::info!(id = %list.id, name = %list.name, "List saved successfully");
    Ok(())
}

/// Merge the cart's items into an existing list.
///
/// The cart items are appended after the list's own items, preserving
/// both orders. A missing target is a failed update; nothing is mutated.
///
/// # Errors
///
/// Returns `CartCommandError::Validation` if the target list does not
/// exist.
pub fn append_to_list(config: &Config, list_id: &str) -> Result<(), CartCommandError> {
    let storage = FileStorage::open(&config.data_dir)?;
    let lists = ListStore::new(&storage);
    let id = ListId::from(list_id);

    let Some(list) = lists.get(&id)? else {
        return Err(CartCommandError::Validation(format!(
            "No such list: {list_id}"
        )));
    };

    let mut merged = list.items;
    merged.extend(CartStore::new(&storage).load()?);

    lists.update(
        &id,
        ListPatch {
            name: None,
            items: Some(merged),
        },
    )?;
    tracing::info!(id = %id, "Items added to list successfully");
    Ok(())
}

fn format_item(item: &ListItem) -> Result<String, PriceError> {
    let line_total = item.unit_price()?.amount() * rust_decimal::Decimal::from(item.quantity);
    let mut line = format!(
        "{} x {}  = R{:.2}  [{}]",
        item.current_price, item.quantity, line_total, item.category
    );
    let saving = item_savings(item)?;
    if saving > rust_decimal::Decimal::ZERO {
        line.push_str(&format!("  save R{saving:.2}"));
    }
    Ok(format!("{}\n  {line}", item.title))
}
