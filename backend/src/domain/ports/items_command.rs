//! Driving port for item mutations.

use async_trait::async_trait;

use crate::domain::{Error, Item, ItemChanges, ItemId, NewItem};

/// Domain use-case port for creating, updating and deleting items.
#[async_trait]
pub trait ItemsCommand: Send + Sync {
    /// Store a validated item and return the stored record.
    async fn create_item(&self, item: NewItem) -> Result<Item, Error>;

    /// Merge `changes` into an existing item, failing with `not_found` when
    /// the id is unknown.
    async fn update_item(&self, id: ItemId, changes: ItemChanges) -> Result<Item, Error>;

    /// Remove an item, failing with `not_found` when the id is unknown.
    async fn delete_item(&self, id: ItemId) -> Result<(), Error>;
}
