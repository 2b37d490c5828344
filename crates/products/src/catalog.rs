//! In-memory product catalog.
//!
//! The `Product` aggregate only sees itself, so it cannot know whether a SKU
//! is taken. The catalog owns the cross-product view and rejects duplicate
//! SKUs before a create command reaches the aggregate.

use std::collections::HashMap;

use lotkeeper_core::{Aggregate, DomainError, DomainResult, ProductId};

use crate::product::{Product, ProductCommand, ProductEvent};
use crate::sku::Sku;

#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashMap<ProductId, Product>,
    by_sku: HashMap<Sku, ProductId>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from existing products, enforcing id and SKU uniqueness.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> DomainResult<Self> {
        let mut catalog = Self::new();
        for product in products {
            catalog.insert(product)?;
        }
        Ok(catalog)
    }

    /// Add an already-created product.
    pub fn insert(&mut self, product: Product) -> DomainResult<()> {
        let Some(sku) = product.sku().cloned() else {
            return Err(DomainError::invariant(format!(
                "product {} has not been created",
                product.id_typed()
            )));
        };
        let id = product.id_typed();
        if self.products.contains_key(&id) {
            return Err(DomainError::conflict(format!("duplicate product id {id}")));
        }
        if let Some(existing) = self.by_sku.get(&sku) {
            return Err(DomainError::conflict(format!(
                "SKU {sku} already belongs to product {existing}"
            )));
        }
        self.by_sku.insert(sku, id);
        self.products.insert(id, product);
        Ok(())
    }

    /// Execute a lifecycle command and return the emitted events.
    ///
    /// Creates are checked for id and SKU collisions; every other command is
    /// routed to the existing product.
    pub fn execute(&mut self, command: &ProductCommand) -> DomainResult<Vec<ProductEvent>> {
        let product_id = command.product_id();

        if let ProductCommand::CreateProduct(cmd) = command {
            let sku = Sku::parse(&cmd.sku)?;
            if let Some(existing) = self.by_sku.get(&sku) {
                return Err(DomainError::conflict(format!(
                    "SKU {sku} already belongs to product {existing}"
                )));
            }
            if self.products.contains_key(&product_id) {
                return Err(DomainError::conflict("product already exists"));
            }

            let mut product = Product::empty(product_id);
            let events = product.handle(command)?;
            for event in &events {
                product.apply(event);
            }
            tracing::debug!(%product_id, %sku, "product created");
            self.by_sku.insert(sku, product_id);
            self.products.insert(product_id, product);
            return Ok(events);
        }

        let product = self.products.get_mut(&product_id).ok_or_else(DomainError::not_found)?;
        let events = product.handle(command)?;
        for event in &events {
            product.apply(event);
        }
        tracing::debug!(%product_id, events = events.len(), "product command applied");
        Ok(events)
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn find_by_sku(&self, sku: &str) -> Option<&Product> {
        let sku = Sku::parse(sku).ok()?;
        self.by_sku.get(&sku).and_then(|id| self.products.get(id))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products sorted by id.
    pub fn products(&self) -> Vec<&Product> {
        let mut products: Vec<&Product> = self.products.values().collect();
        products.sort_by_key(|p| p.id_typed());
        products
    }

    pub fn into_map(self) -> HashMap<ProductId, Product> {
        self.products
    }
}
