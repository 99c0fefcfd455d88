//! Driving port for inventory statistics.

use async_trait::async_trait;

use crate::domain::{Error, ItemStats};

/// Domain use-case port computing [`ItemStats`] from the live item set.
#[async_trait]
pub trait ItemStatsQuery: Send + Sync {
    /// Compute fresh statistics; nothing is cached between calls.
    async fn fetch_stats(&self) -> Result<ItemStats, Error>;
}
