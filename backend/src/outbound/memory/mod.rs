//! In-process store implementing the item and user repository ports.
//!
//! Records live in `BTreeMap`s behind `RwLock`s for the lifetime of the
//! process; nothing is persisted. Every operation takes one lock for one
//! short critical section and never awaits while holding it, so the async
//! port methods complete without yielding.

mod items;
mod sample_items;
mod users;

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::{debug, error};

use crate::domain::ports::{ItemRepositoryError, UserRepositoryError};
use crate::domain::{Item, ItemId, NewItem, User, UserId};

pub use self::sample_items::sample_items;

/// Rows keyed by identifier plus the last identifier handed out.
///
/// Identifiers start at 1 and are never reused, even after deletion.
#[derive(Debug)]
struct Table<K, V> {
    rows: BTreeMap<K, V>,
    last_id: i64,
}

impl<K, V> Default for Table<K, V> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<K: Ord, V> Table<K, V> {
    /// Reserve the next identifier, or `None` once the space is exhausted.
    fn allocate_id(&mut self) -> Option<i64> {
        let next = self.last_id.checked_add(1)?;
        self.last_id = next;
        Some(next)
    }
}

/// Shared in-memory store.
///
/// Construct one per process (or per test) and hand it to the service as an
/// `Arc`.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use mockable::DefaultClock;
/// use inventory_backend::outbound::memory::MemoryStore;
///
/// let store = Arc::new(MemoryStore::new(Arc::new(DefaultClock)));
/// # let _ = store;
/// ```
pub struct MemoryStore {
    items: RwLock<Table<ItemId, Item>>,
    users: RwLock<Table<UserId, User>>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    /// Create an empty store stamping new items with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            items: RwLock::new(Table::default()),
            users: RwLock::new(Table::default()),
            clock,
        }
    }

    /// Insert records with explicit creation timestamps, assigning
    /// sequential identifiers in iteration order.
    ///
    /// Used to load sample data at startup; see [`sample_items`].
    pub fn seed<I>(&self, records: I) -> Result<Vec<Item>, ItemRepositoryError>
    where
        I: IntoIterator<Item = (NewItem, DateTime<Utc>)>,
    {
        let mut table = self.write_items()?;
        let mut seeded = Vec::new();
        for (new_item, date_added) in records {
            let id = table
                .allocate_id()
                .map(ItemId::new)
                .ok_or_else(ItemRepositoryError::ids_exhausted)?;
            let item = Item::create(id, new_item, date_added);
            table.rows.insert(id, item.clone());
            seeded.push(item);
        }
        debug!(count = seeded.len(), "seeded item table");
        Ok(seeded)
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.utc()
    }

    fn read_items(&self) -> Result<RwLockReadGuard<'_, Table<ItemId, Item>>, ItemRepositoryError> {
        self.items.read().map_err(|err| item_lock_poisoned(&err))
    }

    fn write_items(
        &self,
    ) -> Result<RwLockWriteGuard<'_, Table<ItemId, Item>>, ItemRepositoryError> {
        self.items.write().map_err(|err| item_lock_poisoned(&err))
    }

    fn read_users(&self) -> Result<RwLockReadGuard<'_, Table<UserId, User>>, UserRepositoryError> {
        self.users.read().map_err(|err| user_lock_poisoned(&err))
    }

    fn write_users(
        &self,
    ) -> Result<RwLockWriteGuard<'_, Table<UserId, User>>, UserRepositoryError> {
        self.users.write().map_err(|err| user_lock_poisoned(&err))
    }
}

fn item_lock_poisoned<G>(err: &PoisonError<G>) -> ItemRepositoryError {
    error!(error = %err, "item table lock poisoned");
    ItemRepositoryError::storage("item table lock poisoned")
}

fn user_lock_poisoned<G>(err: &PoisonError<G>) -> UserRepositoryError {
    error!(error = %err, "user table lock poisoned");
    UserRepositoryError::storage("user table lock poisoned")
}

/// Newest first; equal timestamps put the later insert first.
fn newest_first(items: &mut [Item]) {
    items.sort_by(|a, b| b.date_added.cmp(&a.date_added).then(b.id.cmp(&a.id)));
}
