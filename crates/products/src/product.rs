use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lotkeeper_core::{Aggregate, AggregateRoot, DomainError, DomainResult, ProductId};
use lotkeeper_events::Event;

use crate::sku::Sku;

/// Stock threshold applied when a product is created without one.
pub const DEFAULT_STOCK_THRESHOLD: u32 = 10;

const MAX_NAME_LEN: usize = 80;
const MAX_CATEGORY_LEN: usize = 40;

/// Product status lifecycle.
///
/// Inactive products stay in the catalog for history but drop out of every
/// active-inventory query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    Inactive,
}

/// Aggregate root: Product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    sku: Option<Sku>,
    name: String,
    category: Option<String>,
    stock_threshold: u32,
    status: ProductStatus,
    version: u64,
    created: bool,
}

impl Product {
    /// Create an empty, not-yet-created aggregate instance for rehydration.
    pub fn empty(id: ProductId) -> Self {
        Self {
            id,
            sku: None,
            name: String::new(),
            category: None,
            stock_threshold: DEFAULT_STOCK_THRESHOLD,
            status: ProductStatus::Active,
            version: 0,
            created: false,
        }
    }

    /// Run a `CreateProduct` command against an empty aggregate and return the
    /// resulting product.
    pub fn register(cmd: CreateProduct) -> DomainResult<Self> {
        let mut product = Self::empty(cmd.product_id);
        let events = product.handle(&ProductCommand::CreateProduct(cmd))?;
        for event in &events {
            product.apply(event);
        }
        Ok(product)
    }

    /// Rebuild a product from its event history.
    pub fn rehydrate<'a>(id: ProductId, events: impl IntoIterator<Item = &'a ProductEvent>) -> Self {
        let mut product = Self::empty(id);
        for event in events {
            product.apply(event);
        }
        product
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    /// SKU of a created product. `None` only before `ProductCreated` is applied.
    pub fn sku(&self) -> Option<&Sku> {
        self.sku.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn stock_threshold(&self) -> u32 {
        self.stock_threshold
    }

    pub fn status(&self) -> ProductStatus {
        self.status
    }

    pub fn is_created(&self) -> bool {
        self.created
    }

    pub fn is_active(&self) -> bool {
        self.created && self.status == ProductStatus::Active
    }
}

impl AggregateRoot for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: CreateProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProduct {
    pub product_id: ProductId,
    pub sku: String,
    pub name: String,
    pub category: Option<String>,
    /// Falls back to [`DEFAULT_STOCK_THRESHOLD`].
    pub stock_threshold: Option<u32>,
    pub occurred_at: DateTime<Utc>,
}

/// Command: UpdateProduct (edit form; carries the complete new values).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProduct {
    pub product_id: ProductId,
    pub name: String,
    pub category: Option<String>,
    pub stock_threshold: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Command: DeactivateProduct (logical removal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeactivateProduct {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: ReactivateProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactivateProduct {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCommand {
    CreateProduct(CreateProduct),
    UpdateProduct(UpdateProduct),
    DeactivateProduct(DeactivateProduct),
    ReactivateProduct(ReactivateProduct),
}

impl ProductCommand {
    pub fn product_id(&self) -> ProductId {
        match self {
            ProductCommand::CreateProduct(c) => c.product_id,
            ProductCommand::UpdateProduct(c) => c.product_id,
            ProductCommand::DeactivateProduct(c) => c.product_id,
            ProductCommand::ReactivateProduct(c) => c.product_id,
        }
    }
}

/// Event: ProductCreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub product_id: ProductId,
    pub sku: Sku,
    pub name: String,
    pub category: Option<String>,
    pub stock_threshold: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdated {
    pub product_id: ProductId,
    pub name: String,
    pub category: Option<String>,
    pub stock_threshold: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductDeactivated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDeactivated {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductReactivated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductReactivated {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductEvent {
    ProductCreated(ProductCreated),
    ProductUpdated(ProductUpdated),
    ProductDeactivated(ProductDeactivated),
    ProductReactivated(ProductReactivated),
}

impl Event for ProductEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ProductEvent::ProductCreated(_) => "products.product.created",
            ProductEvent::ProductUpdated(_) => "products.product.updated",
            ProductEvent::ProductDeactivated(_) => "products.product.deactivated",
            ProductEvent::ProductReactivated(_) => "products.product.reactivated",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ProductEvent::ProductCreated(e) => e.occurred_at,
            ProductEvent::ProductUpdated(e) => e.occurred_at,
            ProductEvent::ProductDeactivated(e) => e.occurred_at,
            ProductEvent::ProductReactivated(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Product {
    type Command = ProductCommand;
    type Event = ProductEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            ProductEvent::ProductCreated(e) => {
                self.id = e.product_id;
                self.sku = Some(e.sku.clone());
                self.name = e.name.clone();
                self.category = e.category.clone();
                self.stock_threshold = e.stock_threshold;
                self.status = ProductStatus::Active;
                self.created = true;
            }
            ProductEvent::ProductUpdated(e) => {
                self.name = e.name.clone();
                self.category = e.category.clone();
                self.stock_threshold = e.stock_threshold;
            }
            ProductEvent::ProductDeactivated(_) => {
                self.status = ProductStatus::Inactive;
            }
            ProductEvent::ProductReactivated(_) => {
                self.status = ProductStatus::Active;
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            ProductCommand::CreateProduct(cmd) => self.handle_create(cmd),
            ProductCommand::UpdateProduct(cmd) => self.handle_update(cmd),
            ProductCommand::DeactivateProduct(cmd) => self.handle_deactivate(cmd),
            ProductCommand::ReactivateProduct(cmd) => self.handle_reactivate(cmd),
        }
    }
}

fn normalize_name(raw: &str) -> DomainResult<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(DomainError::validation(format!(
            "name cannot exceed {MAX_NAME_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

/// Blank categories collapse to `None`.
fn normalize_category(raw: Option<&str>) -> DomainResult<Option<String>> {
    let Some(category) = raw.map(str::trim).filter(|c| !c.is_empty()) else {
        return Ok(None);
    };
    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(DomainError::validation(format!(
            "category cannot exceed {MAX_CATEGORY_LEN} characters"
        )));
    }
    Ok(Some(category.to_string()))
}

impl Product {
    fn ensure_created(&self) -> Result<(), DomainError> {
        if !self.created {
            return Err(DomainError::not_found());
        }
        Ok(())
    }

    fn ensure_product_id(&self, product_id: ProductId) -> Result<(), DomainError> {
        if self.id != product_id {
            return Err(DomainError::invariant("product_id mismatch"));
        }
        Ok(())
    }

    fn handle_create(&self, cmd: &CreateProduct) -> Result<Vec<ProductEvent>, DomainError> {
        if self.created {
            return Err(DomainError::conflict("product already exists"));
        }

        let name = normalize_name(&cmd.name)?;
        let sku = Sku::parse(&cmd.sku)?;
        let category = normalize_category(cmd.category.as_deref())?;

        // SKU uniqueness spans the whole catalog; `ProductCatalog` checks it
        // before dispatching a create.

        Ok(vec![ProductEvent::ProductCreated(ProductCreated {
            product_id: cmd.product_id,
            sku,
            name,
            category,
            stock_threshold: cmd.stock_threshold.unwrap_or(DEFAULT_STOCK_THRESHOLD),
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_update(&self, cmd: &UpdateProduct) -> Result<Vec<ProductEvent>, DomainError> {
        self.ensure_created()?;
        self.ensure_product_id(cmd.product_id)?;

        let name = normalize_name(&cmd.name)?;
        let category = normalize_category(cmd.category.as_deref())?;

        if name == self.name && category == self.category && cmd.stock_threshold == self.stock_threshold {
            return Err(DomainError::validation("update does not change the product"));
        }

        Ok(vec![ProductEvent::ProductUpdated(ProductUpdated {
            product_id: cmd.product_id,
            name,
            category,
            stock_threshold: cmd.stock_threshold,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_deactivate(&self, cmd: &DeactivateProduct) -> Result<Vec<ProductEvent>, DomainError> {
        self.ensure_created()?;
        self.ensure_product_id(cmd.product_id)?;

        if self.status == ProductStatus::Inactive {
            return Err(DomainError::conflict("product is already inactive"));
        }

        Ok(vec![ProductEvent::ProductDeactivated(ProductDeactivated {
            product_id: cmd.product_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_reactivate(&self, cmd: &ReactivateProduct) -> Result<Vec<ProductEvent>, DomainError> {
        self.ensure_created()?;
        self.ensure_product_id(cmd.product_id)?;

        if self.status == ProductStatus::Active {
            return Err(DomainError::conflict("product is already active"));
        }

        Ok(vec![ProductEvent::ProductReactivated(ProductReactivated {
            product_id: cmd.product_id,
            occurred_at: cmd.occurred_at,
        })])
    }
}
