//! Port for item storage.
//!
//! The repository is the authoritative holder of item records. It assigns
//! identifiers and creation timestamps but performs no validation: callers
//! hand it [`NewItem`] and [`ItemChanges`] values that already passed the
//! inbound checks.

use async_trait::async_trait;

use crate::domain::{Item, ItemChanges, ItemId, ItemType, NewItem};

use super::define_port_error;

define_port_error! {
    /// Errors raised by item repository adapters.
    pub enum ItemRepositoryError {
        /// The backing storage could not be accessed.
        Storage { message: String } => "item storage unavailable: {message}",
        /// No further identifiers can be allocated.
        IdsExhausted => "item identifier space exhausted",
    }
}

/// Port for item persistence and linear queries.
///
/// # Ordering
///
/// Every method returning several items orders them newest first by
/// `date_added`; items sharing a timestamp are ordered by descending id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Store a new item, assigning the next identifier and the current time.
    async fn create(&self, item: NewItem) -> Result<Item, ItemRepositoryError>;

    /// Fetch one item. Returns `None` when the id is unknown.
    async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, ItemRepositoryError>;

    /// Every stored item.
    async fn list(&self) -> Result<Vec<Item>, ItemRepositoryError>;

    /// Merge `changes` into an existing item. Returns `None` when the id is
    /// unknown, in which case nothing is stored.
    async fn update(
        &self,
        id: ItemId,
        changes: ItemChanges,
    ) -> Result<Option<Item>, ItemRepositoryError>;

    /// Remove an item, reporting whether one was removed.
    async fn delete(&self, id: ItemId) -> Result<bool, ItemRepositoryError>;

    /// Items whose name, description or category contains `query`, ignoring
    /// case.
    async fn search(&self, query: &str) -> Result<Vec<Item>, ItemRepositoryError>;

    /// Items in exactly this category.
    async fn list_by_type(&self, item_type: ItemType) -> Result<Vec<Item>, ItemRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn storage_error_mentions_cause() {
        let err = ItemRepositoryError::storage("lock poisoned");
        assert_eq!(err.to_string(), "item storage unavailable: lock poisoned");
    }
}
