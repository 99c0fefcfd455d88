//! Driving port for reading items.
//!
//! HTTP handlers depend on this trait rather than on the repository so they
//! receive domain errors (`not_found`, `internal_error`) instead of adapter
//! failures.

use async_trait::async_trait;

use crate::domain::{Error, Item, ItemId, ItemType};

/// Which items a listing should return.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ItemFilter {
    /// Every item.
    #[default]
    All,
    /// Case-insensitive substring search over name, description and category.
    Search(String),
    /// Exact category match.
    Type(ItemType),
}

/// Domain use-case port for item reads.
#[async_trait]
pub trait ItemsQuery: Send + Sync {
    /// List items matching `filter`, newest first.
    async fn list_items(&self, filter: ItemFilter) -> Result<Vec<Item>, Error>;

    /// Fetch one item, failing with `not_found` when it does not exist.
    async fn fetch_item(&self, id: ItemId) -> Result<Item, Error>;
}
