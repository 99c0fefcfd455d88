//! Inventory service implementing the item driving ports.
//!
//! The service is a thin mapping layer: it forwards to an [`ItemRepository`],
//! turns missing records into `not_found` errors and repository failures into
//! redacted `internal_error`s after logging the cause.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, error};

use crate::domain::ports::{
    ItemFilter, ItemRepository, ItemRepositoryError, ItemStatsQuery, ItemsCommand, ItemsQuery,
};
use crate::domain::{Error, Item, ItemChanges, ItemId, ItemStats, NewItem};

/// Message returned when an item id does not resolve.
pub const ITEM_NOT_FOUND_MESSAGE: &str = "Item not found";

fn map_repository_error(operation: &'static str, err: ItemRepositoryError) -> Error {
    error!(error = %err, operation, "item repository failure");
    Error::internal(format!("failed to {operation}: {err}"))
}

fn item_not_found(id: ItemId) -> Error {
    debug!(item_id = %id, "item not found");
    Error::not_found(ITEM_NOT_FOUND_MESSAGE)
}

/// Item use-cases backed by a repository and a clock.
#[derive(Clone)]
pub struct InventoryService<R> {
    items: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> InventoryService<R> {
    /// Create a service over `items`, reading "now" for statistics from
    /// `clock`.
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use inventory_backend::domain::InventoryService;
    /// use inventory_backend::outbound::memory::MemoryStore;
    ///
    /// let clock = Arc::new(DefaultClock);
    /// let store = Arc::new(MemoryStore::new(clock.clone()));
    /// let _service = InventoryService::new(store, clock);
    /// ```
    pub fn new(items: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { items, clock }
    }
}

#[async_trait]
impl<R> ItemsQuery for InventoryService<R>
where
    R: ItemRepository,
{
    async fn list_items(&self, filter: ItemFilter) -> Result<Vec<Item>, Error> {
        let result = match filter {
            ItemFilter::All => self.items.list().await,
            ItemFilter::Search(query) => self.items.search(&query).await,
            ItemFilter::Type(item_type) => self.items.list_by_type(item_type).await,
        };
        result.map_err(|err| map_repository_error("fetch items", err))
    }

    async fn fetch_item(&self, id: ItemId) -> Result<Item, Error> {
        self.items
            .find_by_id(id)
            .await
            .map_err(|err| map_repository_error("fetch item", err))?
            .ok_or_else(|| item_not_found(id))
    }
}

#[async_trait]
impl<R> ItemsCommand for InventoryService<R>
where
    R: ItemRepository,
{
    async fn create_item(&self, item: NewItem) -> Result<Item, Error> {
        let created = self
            .items
            .create(item)
            .await
            .map_err(|err| map_repository_error("create item", err))?;
        debug!(item_id = %created.id, item_type = %created.item_type, "item created");
        Ok(created)
    }

    async fn update_item(&self, id: ItemId, changes: ItemChanges) -> Result<Item, Error> {
        let updated = self
            .items
            .update(id, changes)
            .await
            .map_err(|err| map_repository_error("update item", err))?
            .ok_or_else(|| item_not_found(id))?;
        debug!(item_id = %id, "item updated");
        Ok(updated)
    }

    async fn delete_item(&self, id: ItemId) -> Result<(), Error> {
        let removed = self
            .items
            .delete(id)
            .await
            .map_err(|err| map_repository_error("delete item", err))?;
        if !removed {
            return Err(item_not_found(id));
        }
        debug!(item_id = %id, "item deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> ItemStatsQuery for InventoryService<R>
where
    R: ItemRepository,
{
    async fn fetch_stats(&self) -> Result<ItemStats, Error> {
        let items = self
            .items
            .list()
            .await
            .map_err(|err| map_repository_error("fetch statistics", err))?;
        Ok(ItemStats::summarise(&items, self.clock.utc()))
    }
}

#[cfg(test)]
#[path = "inventory_service_tests.rs"]
mod tests;
