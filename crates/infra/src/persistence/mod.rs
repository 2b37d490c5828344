//! Persistence boundary for products and batches.
//!
//! The domain never talks to storage; callers load snapshots through a
//! `PersistenceProvider` and hand plain collections to the inventory queries.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryPersistence;
pub use r#trait::{PersistenceError, PersistenceProvider};
