//! Domain primitives, aggregates and use-cases.
//!
//! Purpose: define the strongly typed inventory model the HTTP adapter and
//! the storage adapter both speak, plus the service that ties them together.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Item, NewItem, ItemChanges: the inventory aggregate and its inputs.
//! - ItemType / ItemCondition: closed category and condition vocabularies.
//! - ItemStats: dashboard counts.
//! - User / NewUser: stored user records.
//! - InventoryService: implementation of the item driving ports.

pub mod error;
pub mod inventory_service;
pub mod item;
pub mod item_stats;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::inventory_service::{ITEM_NOT_FOUND_MESSAGE, InventoryService};
pub use self::item::{
    Item, ItemChanges, ItemCondition, ItemId, ItemType, NewItem, ParseVocabularyError,
};
pub use self::item_stats::{ItemStats, RECENT_WINDOW_DAYS};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User, UserId};

