//! Saved shopping list commands.

use std::path::Path;

use chrono::Utc;
use thiserror::Error;

use trolley_core::export;
use trolley_core::list::ShoppingList;
use trolley_core::totals::{total_price, total_savings};
use trolley_core::types::{ListId, PriceError};
use trolley_store::{FileStorage, ListPatch, ListStore, StorageError, StoreError};

use crate::config::Config;

/// Errors that can occur during list commands.
#[derive(Debug, Error)]
pub enum ListCommandError {
    /// Data directory could not be opened.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// List read or write failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An item carries malformed price text.
    #[error("malformed price in list: {0}")]
    Price(#[from] PriceError),

    /// Export file could not be written.
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    /// User input was rejected; nothing was mutated.
    #[error("{0}")]
    Validation(String),
}

fn list_store(config: &Config) -> Result<ListStore<FileStorage>, ListCommandError> {
    Ok(ListStore::new(FileStorage::open(&config.data_dir)?))
}

/// Print every saved list, newest-updated first.
///
/// A list whose items carry malformed price text is still shown, with a
/// warning in place of its totals.
///
/// # Errors
///
/// Returns `ListCommandError` if the store cannot be read.
pub fn ls(config: &Config) -> Result<(), ListCommandError> {
    let lists = list_store(config)?.all()?;

    if lists.is_empty() {
        println!("No saved lists");
        return Ok(());
    }

    for list in &lists {
        print!(
            "{}  {}  ({} items, updated {})",
            list.id,
            list.name,
            list.items.len(),
            list.updated_at.format("%Y-%m-%d"),
        );
        match total_price(&list.items) {
            Ok(total) => println!("  R{total:.2}"),
            Err(err) => {
                tracing::warn!(id = %list.id, error = %err, "List has malformed price text");
                println!();
            }
        }
    }
    Ok(())
}

/// Print one list with its items and totals.
///
/// # Errors
///
/// Returns `ListCommandError::Validation` if the list does not exist.
pub fn show(config: &Config, id: &str) -> Result<(), ListCommandError> {
    let list = fetch(config, id)?;

    println!("{} ({})", list.name, list.id);
    println!(
        "Created {}, updated {}",
        list.created_at.format("%Y-%m-%d"),
        list.updated_at.format("%Y-%m-%d"),
    );
    println!();

    if list.items.is_empty() {
        println!("(empty)");
        return Ok(());
    }

    for item in &list.items {
        println!(
            "{} x {}  {}  [{}]",
            item.current_price, item.quantity, item.title, item.category
        );
    }
    println!();
    println!("Total Price: R{:.2}", total_price(&list.items)?);
    println!("Total Savings: R{:.2}", total_savings(&list.items)?);
    Ok(())
}

/// Create a new empty list.
///
/// # Errors
///
/// Returns `ListCommandError::Validation` if the name is empty; nothing
/// is mutated in that case.
pub fn create(config: &Config, name: &str) -> Result<(), ListCommandError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ListCommandError::Validation(
            "Please enter a list name".to_owned(),
        ));
    }

    let list = list_store(config)?.create(name, Vec::new())?;
    println!("{}", list.id);
    Ok(())
}

/// Rename a list.
///
/// # Errors
///
/// Returns `ListCommandError::Validation` if the name is empty or the
/// list does not exist.
pub fn rename(config: &Config, id: &str, name: &str) -> Result<(), ListCommandError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ListCommandError::Validation(
            "Please enter a list name".to_owned(),
        ));
    }

    let patch = ListPatch {
        name: Some(name.to_owned()),
        items: None,
    };
    if list_store(config)?.update(&ListId::from(id), patch)?.is_none() {
        return Err(ListCommandError::Validation(format!("No such list: {id}")));
    }
    tracing::info!(id, name, "List renamed");
    Ok(())
}

/// Duplicate a list under "<name> (Copy)" and print the new id.
///
/// # Errors
///
/// Returns `ListCommandError::Validation` if the list does not exist.
pub fn duplicate(config: &Config, id: &str) -> Result<(), ListCommandError> {
    let Some(copy) = list_store(config)?.duplicate(&ListId::from(id))? else {
        return Err(ListCommandError::Validation(format!("No such list: {id}")));
    };
    println!("{}", copy.id);
    Ok(())
}

/// Delete a list. Deleting a missing id is a no-op.
///
/// # Errors
///
/// Returns `ListCommandError` if the store cannot be written.
pub fn delete(config: &Config, id: &str) -> Result<(), ListCommandError> {
    list_store(config)?.delete(&ListId::from(id))?;
    tracing::info!(id, "List deleted");
    Ok(())
}

/// Export a list as plain text, to a file or standard output.
///
/// # Errors
///
/// Returns `ListCommandError::Validation` if the list does not exist,
/// or `ListCommandError::Io` if the output file cannot be written.
pub fn export(config: &Config, id: &str, output: Option<&Path>) -> Result<(), ListCommandError> {
    let list = fetch(config, id)?;
    let text = export::render(&list.items, Utc::now().date_naive())?;

    match output {
        Some(path) => {
            std::fs::write(path, &text)?;
            tracing::info!(id, path = %path.display(), "List exported");
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn fetch(config: &Config, id: &str) -> Result<ShoppingList, ListCommandError> {
    list_store(config)?
        .get(&ListId::from(id))?
        .ok_or_else(|| ListCommandError::Validation(format!("No such list: {id}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use trolley_feed::DEFAULT_FEED_URL;
    use trolley_store::FileStorage;

    fn config(dir: &Path) -> Config {
        Config {
            feed_url: DEFAULT_FEED_URL.parse().unwrap(),
            data_dir: dir.to_path_buf(),
        }
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        let list = ListStore::new(FileStorage::open(dir.path()).unwrap())
            .create("Weekly", Vec::new())
            .unwrap();

        let out = dir.path().join("weekly.txt");
        export(&config, list.id.as_str(), Some(&out)).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("Pick n Pay Shopping List\n"));
        assert!(text.contains("Total Items: 0"));
    }

    #[test]
    fn test_export_missing_list_is_a_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            export(&config(dir.path()), "list_0_missing00", None),
            Err(ListCommandError::Validation(_))
        ));
    }

    #[test]
    fn test_create_rejects_blank_name_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            create(&config(dir.path()), "   "),
            Err(ListCommandError::Validation(_))
        ));
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }
}
