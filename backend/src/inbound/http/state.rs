//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ItemStatsQuery, ItemsCommand, ItemsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub items: Arc<dyn ItemsQuery>,
    pub items_command: Arc<dyn ItemsCommand>,
    pub stats: Arc<dyn ItemStatsQuery>,
}

impl HttpState {
    /// Construct state from individual ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use inventory_backend::domain::InventoryService;
    /// use inventory_backend::inbound::http::state::HttpState;
    /// use inventory_backend::outbound::memory::MemoryStore;
    ///
    /// let clock = Arc::new(DefaultClock);
    /// let store = Arc::new(MemoryStore::new(clock.clone()));
    /// let service = Arc::new(InventoryService::new(store, clock));
    /// let state = HttpState::new(service.clone(), service.clone(), service);
    /// let _items = state.items.clone();
    /// ```
    pub fn new(
        items: Arc<dyn ItemsQuery>,
        items_command: Arc<dyn ItemsCommand>,
        stats: Arc<dyn ItemStatsQuery>,
    ) -> Self {
        Self {
            items,
            items_command,
            stats,
        }
    }

    /// Route every port to one implementation.
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: ItemsQuery + ItemsCommand + ItemStatsQuery + 'static,
    {
        Self::new(service.clone(), service.clone(), service)
    }
}
