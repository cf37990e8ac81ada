//! CRUD over persisted shopping lists.
//!
//! One storage entry per list, keyed by the list's own id. Enumeration
//! is a full scan of the key space: entries that fail to parse as a
//! shopping list are logged and skipped, never surfaced as errors,
//! because the store shares its key space with unrelated data (the
//! in-progress cart among others).

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use thiserror::Error;

use trolley_core::list::{ListItem, ShoppingList};
use trolley_core::types::ListId;
use trolley_core::RETAILER;

use crate::storage::{Storage, StorageError};

/// Length of the random id suffix.
const ID_SUFFIX_LEN: usize = 9;

/// Errors that can occur in list store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend read or write failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// A list record could not be encoded.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Source of the current time, injectable for deterministic tests.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of fresh list ids, injectable for deterministic tests.
pub trait IdGenerator {
    /// Generate a fresh id.
    fn generate(&self) -> ListId;
}

/// Production id generator: `list_<epoch-millis>_<9 random lowercase
/// alphanumerics>`. Collision probability is negligible but not
/// cryptographically guaranteed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn generate(&self) -> ListId {
        let millis = Utc::now().timestamp_millis();
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(ID_SUFFIX_LEN)
            .map(|b| char::from(b.to_ascii_lowercase()))
            .collect();
        ListId::new(format!("list_{millis}_{suffix}"))
    }
}

/// Partial update applied over an existing list.
///
/// Present fields replace the stored value wholesale (shallow merge);
/// absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ListPatch {
    /// New display name.
    pub name: Option<String>,
    /// New items sequence.
    pub items: Option<Vec<ListItem>>,
}

/// CRUD layer over persisted shopping lists.
pub struct ListStore<S, C = SystemClock, G = RandomIds> {
    storage: S,
    clock: C,
    ids: G,
}

impl<S: Storage> ListStore<S> {
    /// Create a store with the system clock and random id generation.
    pub const fn new(storage: S) -> Self {
        Self::with_parts(storage, SystemClock, RandomIds)
    }
}

impl<S: Storage, C: Clock, G: IdGenerator> ListStore<S, C, G> {
    /// Create a store with explicit clock and id generator.
    pub const fn with_parts(storage: S, clock: C, ids: G) -> Self {
        Self { storage, clock, ids }
    }

    /// Create and persist a new list.
    ///
    /// The store itself does not reject empty names; callers are
    /// expected to validate before calling.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the record cannot be persisted.
    pub fn create(&self, name: &str, items: Vec<ListItem>) -> Result<ShoppingList, StoreError> {
        let now = self.clock.now();
        let list = ShoppingList {
            id: self.ids.generate(),
            name: name.to_owned(),
            items,
            created_at: now,
            updated_at: now,
            retailer: RETAILER.to_owned(),
        };
        self.persist(&list)?;
        tracing::info!(id = %list.id, name = %list.name, "Created shopping list");
        Ok(list)
    }

    /// Every valid list in the store, newest-updated first.
    ///
    /// Entries that fail to parse as a shopping list are logged and
    /// excluded.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be enumerated.
    pub fn all(&self) -> Result<Vec<ShoppingList>, StoreError> {
        let mut lists = Vec::new();
        for key in self.storage.keys()? {
            let Some(value) = self.storage.get(&key)? else {
                continue;
            };
            match serde_json::from_str::<ShoppingList>(&value) {
                Ok(list) => lists.push(list),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Skipping entry that is not a shopping list");
                }
            }
        }
        lists.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(lists)
    }

    /// Look up one list by id.
    ///
    /// Returns `None` for a missing key and also for an entry that fails
    /// to parse (the failure is logged, not raised).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    pub fn get(&self, id: &ListId) -> Result<Option<ShoppingList>, StoreError> {
        let Some(value) = self.storage.get(id.as_str())? else {
            return Ok(None);
        };
        match serde_json::from_str(&value) {
            Ok(list) => Ok(Some(list)),
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "Failed to parse stored list");
                Ok(None)
            }
        }
    }

    /// Merge a patch over an existing list and persist it.
    ///
    /// Bumps `updated_at`. Returns `None` without writing anything when
    /// the id does not exist; callers must treat that as a failed
    /// update, not as "no changes".
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the record cannot be persisted.
    pub fn update(&self, id: &ListId, patch: ListPatch) -> Result<Option<ShoppingList>, StoreError> {
        let Some(mut list) = self.get(id)? else {
            return Ok(None);
        };
        if let Some(name) = patch.name {
            list.name = name;
        }
        if let Some(items) = patch.items {
            list.items = items;
        }
        list.updated_at = self.clock.now();
        self.persist(&list)?;
        Ok(Some(list))
    }

    /// Remove a list; a missing id is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    pub fn delete(&self, id: &ListId) -> Result<(), StoreError> {
        self.storage.remove(id.as_str())?;
        Ok(())
    }

    /// Copy a list under a fresh id with name `"<original> (Copy)"`.
    ///
    /// The items are a deep value copy: mutating the duplicate later
    /// never affects the source. Returns `None` when the source is
    /// missing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the copy cannot be persisted.
    pub fn duplicate(&self, id: &ListId) -> Result<Option<ShoppingList>, StoreError> {
        let Some(source) = self.get(id)? else {
            return Ok(None);
        };
        let copy = self.create(&format!("{} (Copy)", source.name), source.items)?;
        Ok(Some(copy))
    }

    fn persist(&self, list: &ShoppingList) -> Result<(), StoreError> {
        let json = serde_json::to_string(list)?;
        self.storage.set(list.id.as_str(), &json)?;
        Ok(())
    }
}
