//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters such as
//! the in-memory store. Driving ports (`ItemsQuery`, `ItemsCommand`,
//! `ItemStatsQuery`) are what inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod item_repository;
mod item_stats_query;
mod items_command;
mod items_query;
mod user_repository;

#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::{ItemRepository, ItemRepositoryError};
pub use item_stats_query::ItemStatsQuery;
pub use items_command::ItemsCommand;
pub use items_query::{ItemFilter, ItemsQuery};
pub use user_repository::{UserRepository, UserRepositoryError};
