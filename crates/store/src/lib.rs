//! Trolley Store - Persistent shopping-list storage.
//!
//! Persistence is a flat key-value mapping from string key to serialized
//! record, with no transactions and no locking: a single writer is
//! assumed, and concurrent writers race with last-write-wins. The
//! backing store is injectable via the [`Storage`] trait so tests can
//! run against an in-memory fake.
//!
//! # Modules
//!
//! - [`storage`] - The `Storage` trait plus file and in-memory backends
//! - [`lists`] - CRUD over persisted shopping lists
//! - [`cart`] - The single in-progress cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod lists;
pub mod storage;

pub use cart::{CART_KEY, CartError, CartStore};
pub use lists::{Clock, IdGenerator, ListPatch, ListStore, RandomIds, StoreError, SystemClock};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
