use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use lotkeeper_core::{BatchId, DomainError, DomainResult, Entity, ProductId};

const MAX_CODE_LEN: usize = 30;

/// A lot of one product received together, sharing one expiration date.
///
/// `quantity` is unsigned, so negative stock is unrepresentable. A batch with
/// zero quantity is depleted; it is never refilled (new goods get a new batch).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BatchRecord")]
pub struct Batch {
    id: BatchId,
    product_id: ProductId,
    expiration_date: NaiveDate,
    quantity: u32,
    code: Option<String>,
}

impl Batch {
    pub fn new(id: BatchId, product_id: ProductId, expiration_date: NaiveDate, quantity: u32) -> Self {
        Self {
            id,
            product_id,
            expiration_date,
            quantity,
            code: None,
        }
    }

    /// Attach the supplier's external batch code. Blank codes are dropped.
    pub fn with_code(mut self, code: impl AsRef<str>) -> DomainResult<Self> {
        let code = code.as_ref().trim();
        if code.chars().count() > MAX_CODE_LEN {
            return Err(DomainError::validation(format!(
                "batch code cannot exceed {MAX_CODE_LEN} characters"
            )));
        }
        self.code = (!code.is_empty()).then(|| code.to_string());
        Ok(self)
    }

    pub fn id_typed(&self) -> BatchId {
        self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn expiration_date(&self) -> NaiveDate {
        self.expiration_date
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn is_depleted(&self) -> bool {
        self.quantity == 0
    }

    /// Signed day count from `today` to expiration; negative once expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> i64 {
        (self.expiration_date - today).num_days()
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.expiration_date < today
    }
}

/// Wire shape of a batch; converted through the validating constructors.
#[derive(Deserialize)]
struct BatchRecord {
    id: BatchId,
    product_id: ProductId,
    expiration_date: NaiveDate,
    quantity: u32,
    #[serde(default)]
    code: Option<String>,
}

impl TryFrom<BatchRecord> for Batch {
    type Error = DomainError;

    fn try_from(record: BatchRecord) -> Result<Self, Self::Error> {
        let batch = Batch::new(record.id, record.product_id, record.expiration_date, record.quantity);
        match record.code {
            Some(code) => batch.with_code(code),
            None => Ok(batch),
        }
    }
}

impl Entity for Batch {
    type Id = BatchId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
