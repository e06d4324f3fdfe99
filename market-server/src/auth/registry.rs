//! Admin Registry
//!
//! Set of principals granted elevated privileges. Every mutating catalog
//! operation gates on membership here (or on an `admin` role asserted by the
//! identity provider).

use parking_lot::RwLock;
use shared::{AppError, AppResult, ErrorCode};
use std::collections::BTreeSet;

#[derive(Debug, Default)]
pub struct AdminRegistry {
    principals: RwLock<BTreeSet<String>>,
}

impl AdminRegistry {
    pub fn new(bootstrap: impl IntoIterator<Item = String>) -> Self {
        Self {
            principals: RwLock::new(bootstrap.into_iter().collect()),
        }
    }

    /// Grant admin to a principal. Idempotent.
    pub fn grant(&self, principal: &str) -> AppResult<()> {
        if principal.is_empty() {
            return Err(AppError::validation("Principal must not be empty"));
        }
        self.principals.write().insert(principal.to_string());
        Ok(())
    }

    /// Revoke admin from a principal.
    ///
    /// The last registered admin cannot be removed, otherwise the server
    /// would become unadministrable.
    pub fn revoke(&self, principal: &str) -> AppResult<()> {
        let mut principals = self.principals.write();
        if !principals.contains(principal) {
            return Err(AppError::not_found(format!("Admin {}", principal)));
        }
        if principals.len() == 1 {
            return Err(AppError::new(ErrorCode::CannotRemoveLastAdmin));
        }
        principals.remove(principal);
        Ok(())
    }

    pub fn contains(&self, principal: &str) -> bool {
        self.principals.read().contains(principal)
    }

    pub fn list(&self) -> Vec<String> {
        self.principals.read().iter().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.principals.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_and_list() {
        let registry = AdminRegistry::new(["root".to_string()]);
        registry.grant("alice").unwrap();
        registry.grant("alice").unwrap(); // idempotent
        assert_eq!(registry.list(), vec!["alice", "root"]);
        assert!(registry.contains("alice"));
    }

    #[test]
    fn test_grant_empty_rejected() {
        let registry = AdminRegistry::default();
        assert!(registry.grant("").is_err());
    }

    #[test]
    fn test_revoke() {
        let registry = AdminRegistry::new(["root".to_string(), "alice".to_string()]);
        registry.revoke("alice").unwrap();
        assert!(!registry.contains("alice"));
    }

    #[test]
    fn test_revoke_unknown() {
        let registry = AdminRegistry::new(["root".to_string()]);
        let err = registry.revoke("ghost").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_cannot_remove_last_admin() {
        let registry = AdminRegistry::new(["root".to_string()]);
        let err = registry.revoke("root").unwrap_err();
        assert_eq!(err.code, ErrorCode::CannotRemoveLastAdmin);
        assert!(registry.contains("root"));
    }
}
