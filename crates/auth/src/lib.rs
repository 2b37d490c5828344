//! `lotkeeper-auth`: role capability checks for the presentation boundary.
//!
//! There is no login or credential handling here: the presentation layer
//! decides who the user is and asks this crate what that role may do.

pub mod authorize;
pub mod permissions;
pub mod roles;

pub use authorize::{authorize, can_modify_products, role_permissions, AuthzError};
pub use permissions::Permission;
pub use roles::Role;
