//! Infrastructure layer: persistence providers, configuration, seed data.

pub mod config;
pub mod loader;
pub mod persistence;
pub mod seed;

pub use config::{ConfigError, InventoryConfig};
pub use loader::load_inventory;
pub use persistence::{InMemoryPersistence, PersistenceError, PersistenceProvider};
