use async_trait::async_trait;
use rbac_admin_domain::{DomainError, Role};

#[async_trait]
pub trait RoleLookup: Send + Sync {
    /// Resolves every id to a role, failing with `DomainError::RoleNotFound`
    /// carrying the first id that does not exist. No partial results.
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Role>, DomainError>;
}
