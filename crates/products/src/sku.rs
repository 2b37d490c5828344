use serde::{Deserialize, Serialize};

use lotkeeper_core::{DomainError, DomainResult, ValueObject};

/// Maximum SKU length accepted by the catalog.
pub const MAX_SKU_LEN: usize = 30;

/// Stock-keeping unit: the stable, catalog-unique code of a product.
///
/// Always trimmed and non-empty. Comparison is exact (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sku(String);

impl Sku {
    pub fn parse(raw: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        if trimmed.chars().count() > MAX_SKU_LEN {
            return Err(DomainError::validation(format!(
                "SKU cannot exceed {MAX_SKU_LEN} characters"
            )));
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(DomainError::validation("SKU cannot contain whitespace"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Sku {}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Sku {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Sku::parse(value)
    }
}

impl From<Sku> for String {
    fn from(value: Sku) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let sku = Sku::parse("  LAC-001 ").unwrap();
        assert_eq!(sku.as_str(), "LAC-001");
    }

    #[test]
    fn rejects_empty_and_inner_whitespace() {
        assert!(matches!(Sku::parse("   "), Err(DomainError::Validation(_))));
        assert!(matches!(Sku::parse("LAC 001"), Err(DomainError::Validation(_))));
    }

    #[test]
    fn rejects_overlong_codes() {
        let raw = "X".repeat(MAX_SKU_LEN + 1);
        assert!(matches!(Sku::parse(raw), Err(DomainError::Validation(_))));
        assert!(Sku::parse("X".repeat(MAX_SKU_LEN)).is_ok());
    }

    #[test]
    fn deserialization_validates() {
        let ok: Sku = serde_json::from_str("\"QSO-9\"").unwrap();
        assert_eq!(ok.as_str(), "QSO-9");
        assert!(serde_json::from_str::<Sku>("\"\"").is_err());
    }
}
