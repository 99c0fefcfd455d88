//! `ItemRepository` implementation for [`MemoryStore`].

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::{Item, ItemChanges, ItemId, ItemType, NewItem};

use super::{MemoryStore, newest_first};

impl MemoryStore {
    fn collect_items<F>(&self, keep: F) -> Result<Vec<Item>, ItemRepositoryError>
    where
        F: Fn(&Item) -> bool,
    {
        let table = self.read_items()?;
        let mut items: Vec<Item> = table
            .rows
            .values()
            .filter(|item| keep(item))
            .cloned()
            .collect();
        drop(table);
        newest_first(&mut items);
        Ok(items)
    }
}

#[async_trait]
impl ItemRepository for MemoryStore {
    async fn create(&self, item: NewItem) -> Result<Item, ItemRepositoryError> {
        let mut table = self.write_items()?;
        let date_added = self.now();
        let id = table
            .allocate_id()
            .map(ItemId::new)
            .ok_or_else(ItemRepositoryError::ids_exhausted)?;
        let created = Item::create(id, item, date_added);
        table.rows.insert(id, created.clone());
        debug!(item_id = %id, "stored item");
        Ok(created)
    }

    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemRepositoryError> {
        Ok(self.read_items()?.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Item>, ItemRepositoryError> {
        self.collect_items(|_| true)
    }

    async fn update(
        &self,
        id: ItemId,
        changes: ItemChanges,
    ) -> Result<Option<Item>, ItemRepositoryError> {
        let mut table = self.write_items()?;
        let Some(item) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        item.apply(changes);
        Ok(Some(item.clone()))
    }

    async fn delete(&self, id: ItemId) -> Result<bool, ItemRepositoryError> {
        let removed = self.write_items()?.rows.remove(&id).is_some();
        if removed {
            debug!(item_id = %id, "removed item");
        }
        Ok(removed)
    }

    async fn search(&self, query: &str) -> Result<Vec<Item>, ItemRepositoryError> {
        let needle = query.to_lowercase();
        self.collect_items(|item| item.matches_lowercase(&needle))
    }

    async fn list_by_type(&self, item_type: ItemType) -> Result<Vec<Item>, ItemRepositoryError> {
        self.collect_items(|item| item.item_type == item_type)
    }
}
