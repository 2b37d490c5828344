use thiserror::Error;

use crate::{Permission, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: role '{role}' lacks permission '{permission}'")]
    Forbidden { role: Role, permission: String },
}

/// Permissions granted to a role.
///
/// Administrators hold the wildcard; operators may only read.
pub fn role_permissions(role: Role) -> Vec<Permission> {
    match role {
        Role::Administrator => vec![Permission::WILDCARD],
        Role::Operator => vec![
            Permission::INVENTORY_READ,
            Permission::ALERTS_READ,
            Permission::REPORTS_READ,
        ],
    }
}

/// Authorize a role for one permission.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize(role: Role, required: &Permission) -> Result<(), AuthzError> {
    let granted = role_permissions(role)
        .iter()
        .any(|p| p.is_wildcard() || p == required);

    if granted {
        Ok(())
    } else {
        tracing::debug!(%role, permission = %required, "authorization denied");
        Err(AuthzError::Forbidden {
            role,
            permission: required.as_str().to_string(),
        })
    }
}

/// Whether the role may create, edit or deactivate products.
pub fn can_modify_products(role: Role) -> bool {
    authorize(role, &Permission::PRODUCTS_WRITE).is_ok()
}
