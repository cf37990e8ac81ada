//! List store lifecycle tests against the in-memory backend, with a
//! fixed clock and sequential ids for determinism.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Duration, Utc};

use trolley_core::categorize;
use trolley_core::list::ListItem;
use trolley_core::product::Product;
use trolley_core::types::ListId;
use trolley_store::{
    CartStore, Clock, IdGenerator, ListPatch, ListStore, MemoryStorage, Storage,
};

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
struct SequentialIds(AtomicU64);

impl IdGenerator for SequentialIds {
    fn generate(&self) -> ListId {
        let n = self.0.fetch_add(1, Ordering::Relaxed);
        ListId::new(format!("list_{n}_testtest0"))
    }
}

fn store() -> ListStore<MemoryStorage, FixedClock, SequentialIds> {
    ListStore::with_parts(
        MemoryStorage::new(),
        FixedClock(DateTime::from_timestamp_millis(1_700_000_000_000).unwrap()),
        SequentialIds::default(),
    )
}

fn item(name: &str, price: &str, quantity: u32) -> ListItem {
    let product = Product {
        name: name.to_owned(),
        price: price.to_owned(),
        old: None,
        image_url: None,
        promotion: None,
        category: categorize(name),
    };
    let mut item = ListItem::from_product(&product);
    item.quantity = quantity;
    item
}

#[test]
fn create_then_get_round_trips() {
    let store = store();
    let created = store.create("Groceries", vec![]).unwrap();
    let loaded = store.get(&created.id).unwrap().unwrap();
    assert_eq!(loaded.name, "Groceries");
    assert_eq!(loaded, created);
    assert_eq!(loaded.created_at, loaded.updated_at);
    assert_eq!(loaded.retailer, "pnp");
}

#[test]
fn all_sorts_by_updated_at_descending() {
    let storage = MemoryStorage::new();
    // Hand-written entries with distinct updatedAt values.
    for (id, updated) in [("list_1_a", 100), ("list_2_b", 300), ("list_3_c", 200)] {
        let json = format!(
            r#"{{"id":"{id}","name":"{id}","items":[],"createdAt":50,"updatedAt":{updated},"retailer":"pnp"}}"#
        );
        storage.set(id, &json).unwrap();
    }
    let store = ListStore::new(storage);
    let names: Vec<String> = store.all().unwrap().into_iter().map(|l| l.name).collect();
    assert_eq!(names, ["list_2_b", "list_3_c", "list_1_a"]);
}

#[test]
fn all_drops_malformed_and_foreign_entries() {
    let storage = MemoryStorage::new();
    storage.set("broken", "{ not json").unwrap();
    storage.set("wrong-shape", r#"{"id":"x","name":"y"}"#).unwrap();
    storage.set("item-array", "[]").unwrap();
    let store = ListStore::new(storage);
    store.create("Only Valid List", vec![]).unwrap();

    let lists = store.all().unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists.first().map(|l| l.name.as_str()), Some("Only Valid List"));
}

#[test]
fn update_merges_and_bumps_updated_at() {
    let created_at = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
    let storage = MemoryStorage::new();
    let creator = ListStore::with_parts(&storage, FixedClock(created_at), SequentialIds::default());
    let created = creator.create("Weekly", vec![item("Rice 2kg", "R10", 1)]).unwrap();

    let later = created_at + Duration::minutes(5);
    let updater = ListStore::with_parts(&storage, FixedClock(later), SequentialIds::default());
    let updated = updater
        .update(
            &created.id,
            ListPatch {
                name: Some("Weekly Shop".to_owned()),
                items: None,
            },
        )
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Weekly Shop");
    // Untouched fields survive the shallow merge.
    assert_eq!(updated.items, created.items);
    assert_eq!(updated.created_at, created_at);
    assert_eq!(updated.updated_at, later);
    assert!(updated.updated_at >= updated.created_at);
}

#[test]
fn update_missing_id_returns_none_and_writes_nothing() {
    let storage = MemoryStorage::new();
    let store = ListStore::new(&storage);
    let result = store
        .update(
            &ListId::from("list_0_missing00"),
            ListPatch {
                name: Some("X".to_owned()),
                items: None,
            },
        )
        .unwrap();
    assert!(result.is_none());
    assert!(storage.keys().unwrap().is_empty());
}

#[test]
fn delete_missing_is_noop() {
    let store = store();
    store.delete(&ListId::from("list_0_missing00")).unwrap();
}

#[test]
fn duplicate_copies_values_not_references() {
    let store = store();
    let source = store
        .create("Weekly", vec![item("Rice 2kg", "R10", 2)])
        .unwrap();

    let copy = store.duplicate(&source.id).unwrap().unwrap();
    assert_eq!(copy.name, "Weekly (Copy)");
    assert_ne!(copy.id, source.id);
    assert_eq!(copy.items, source.items);

    // Mutating the duplicate must not leak into the source.
    let mut changed = copy.items.clone();
    changed.first_mut().unwrap().quantity = 99;
    store
        .update(
            &copy.id,
            ListPatch {
                name: None,
                items: Some(changed),
            },
        )
        .unwrap()
        .unwrap();

    let source_after = store.get(&source.id).unwrap().unwrap();
    assert_eq!(source_after.items.first().map(|i| i.quantity), Some(2));
}

#[test]
fn duplicate_missing_returns_none() {
    let store = store();
    assert!(store.duplicate(&ListId::from("list_0_missing00")).unwrap().is_none());
}

#[test]
fn cart_key_never_enumerates_as_a_list() {
    let storage = MemoryStorage::new();
    let cart = CartStore::new(&storage);
    let product = Product {
        name: "Rooibos Tea".to_owned(),
        price: "R30".to_owned(),
        old: None,
        image_url: None,
        promotion: None,
        category: categorize("Rooibos Tea"),
    };
    cart.add(&product).unwrap();

    let store = ListStore::new(&storage);
    store.create("Real List", vec![]).unwrap();
    let lists = store.all().unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists.first().map(|l| l.name.as_str()), Some("Real List"));
}

#[test]
fn file_backend_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let id = {
        let store = ListStore::new(trolley_store::FileStorage::open(dir.path()).unwrap());
        store
            .create("Persistent", vec![item("Rice 2kg", "R10", 1)])
            .unwrap()
            .id
    };

    let reopened = ListStore::new(trolley_store::FileStorage::open(dir.path()).unwrap());
    let loaded = reopened.get(&id).unwrap().unwrap();
    assert_eq!(loaded.name, "Persistent");
    assert_eq!(loaded.items.len(), 1);
}
