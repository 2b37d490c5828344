//! Products domain module (event-sourced).
//!
//! Catalog rules for products: SKU format, lifecycle (create, edit, logical
//! deactivation) and SKU uniqueness across the catalog. Pure domain logic, no
//! IO and no storage.

pub mod catalog;
pub mod product;
pub mod sku;

pub use catalog::ProductCatalog;
pub use product::{
    CreateProduct, DeactivateProduct, Product, ProductCommand, ProductCreated,
    ProductDeactivated, ProductEvent, ProductReactivated, ProductStatus, ProductUpdated,
    ReactivateProduct, UpdateProduct, DEFAULT_STOCK_THRESHOLD,
};
pub use sku::Sku;
