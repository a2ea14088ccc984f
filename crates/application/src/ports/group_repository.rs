use async_trait::async_trait;
use rbac_admin_domain::{DomainError, Group, Page, PageRequest, Resource, Role};

#[async_trait]
pub trait GroupRepository: Send + Sync {
    async fn create(
        &self,
        name: String,
        resources: Vec<Resource>,
        roles: Vec<Role>,
    ) -> Result<Group, DomainError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Group>, DomainError>;
    async fn get_by_name(&self, name: &str) -> Result<Option<Group>, DomainError>;
    async fn get_all(&self) -> Result<Vec<Group>, DomainError>;
    async fn get_page(&self, request: PageRequest) -> Result<Page<Group>, DomainError>;
    /// Missing ids are silently skipped; result order is unspecified.
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Group>, DomainError>;
    /// Full replacement of name and both association sets for the row `id`.
    async fn update(
        &self,
        id: i64,
        name: String,
        resources: Vec<Resource>,
        roles: Vec<Role>,
    ) -> Result<Group, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
