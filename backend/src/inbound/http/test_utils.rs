//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{ItemFilter, ItemStatsQuery, ItemsCommand, ItemsQuery};
use crate::domain::{Error, InventoryService, Item, ItemChanges, ItemId, ItemStats, NewItem};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::MemoryStore;
use crate::test_support::FixtureClock;

/// Build handler state backed by a fresh in-memory store.
pub fn memory_state(clock: Arc<FixtureClock>) -> HttpState {
    let store = Arc::new(MemoryStore::new(clock.clone()));
    HttpState::from_service(Arc::new(InventoryService::new(store, clock)))
}

/// Driving-port double whose every call fails with an internal error.
pub struct FailingInventory;

fn storage_down() -> Error {
    Error::internal("failed to fetch items: item storage unavailable: lock poisoned")
}

#[async_trait]
impl ItemsQuery for FailingInventory {
    async fn list_items(&self, _filter: ItemFilter) -> Result<Vec<Item>, Error> {
        Err(storage_down())
    }

    async fn fetch_item(&self, _id: ItemId) -> Result<Item, Error> {
        Err(storage_down())
    }
}

#[async_trait]
impl ItemsCommand for FailingInventory {
    async fn create_item(&self, _item: NewItem) -> Result<Item, Error> {
        Err(storage_down())
    }

    async fn update_item(&self, _id: ItemId, _changes: ItemChanges) -> Result<Item, Error> {
        Err(storage_down())
    }

    async fn delete_item(&self, _id: ItemId) -> Result<(), Error> {
        Err(storage_down())
    }
}

#[async_trait]
impl ItemStatsQuery for FailingInventory {
    async fn fetch_stats(&self) -> Result<ItemStats, Error> {
        Err(storage_down())
    }
}
