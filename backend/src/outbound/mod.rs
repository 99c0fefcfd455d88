//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local store backing the item and user repositories.

pub mod memory;
