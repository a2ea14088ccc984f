use async_trait::async_trait;
use rbac_admin_domain::{DomainError, Resource};

#[async_trait]
pub trait ResourceLookup: Send + Sync {
    /// Resolves every id to a resource, failing with
    /// `DomainError::ResourceNotFound` carrying the first id that does not
    /// exist. No partial results.
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Resource>, DomainError>;
}
