use core::str::FromStr;

use serde::{Deserialize, Serialize};

use lotkeeper_core::DomainError;

/// Role of the signed-in user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full catalog and inventory management.
    Administrator,
    /// Warehouse operator: read-only access to catalog, inventory and alerts.
    Operator,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Administrator => "administrator",
            Role::Operator => "operator",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive; also accepts the legacy Spanish role names
/// (`ADMINISTRADOR`, `OPERARIA`/`OPERARIO`).
impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "administrator" | "admin" | "administrador" => Ok(Role::Administrator),
            "operator" | "operaria" | "operario" => Ok(Role::Operator),
            other => Err(DomainError::validation(format!("unknown role '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_english_and_legacy_names() {
        assert_eq!("Administrator".parse::<Role>().unwrap(), Role::Administrator);
        assert_eq!("ADMINISTRADOR".parse::<Role>().unwrap(), Role::Administrator);
        assert_eq!(" operaria ".parse::<Role>().unwrap(), Role::Operator);
        assert!("cashier".parse::<Role>().is_err());
    }

    #[test]
    fn serializes_snake_case() {
        assert_eq!(serde_json::to_string(&Role::Operator).unwrap(), "\"operator\"");
        assert_eq!(Role::Administrator.to_string(), "administrator");
    }
}
