//! Inventory domain module: batches ("lots") and FEFO queries.
//!
//! Everything here is deterministic domain logic over caller-supplied
//! collections: no IO, no clock reads, no shared mutable state. `today` is
//! always an explicit argument.

pub mod batch;
pub mod fefo;
pub mod inventory;
pub mod stock;

pub use batch::Batch;
pub use fefo::{expiration_alerts, fefo_cmp, fefo_order};
pub use inventory::{BatchInventory, BatchRow};
pub use stock::{low_stock_products, LowStockEntry};
