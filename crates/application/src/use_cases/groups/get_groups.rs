use rbac_admin_domain::{DomainError, Group, Page, PageRequest};
use std::sync::Arc;
use tracing::instrument;

use crate::ports::GroupRepository;

/// Read-side use case for groups: list, paginate, and the id/name lookups.
pub struct GetGroupsUseCase {
    group_repo: Arc<dyn GroupRepository>,
}

impl GetGroupsUseCase {
    pub fn new(group_repo: Arc<dyn GroupRepository>) -> Self {
        Self { group_repo }
    }

    /// All groups. Fails with `EmptyCollection` when the store holds none.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Group>, DomainError> {
        let groups = self.group_repo.get_all().await?;
        if groups.is_empty() {
            return Err(DomainError::EmptyCollection);
        }
        Ok(groups)
    }

    /// One page of groups. Emptiness is judged on the whole collection, so
    /// a request past the last page of a non-empty store returns an empty
    /// page with the true total instead of failing.
    #[instrument(skip(self))]
    pub async fn get_page(&self, request: PageRequest) -> Result<Page<Group>, DomainError> {
        let page = self.group_repo.get_page(request).await?;
        if page.total == 0 {
            return Err(DomainError::EmptyCollection);
        }
        Ok(page)
    }

    /// The subset of groups matching `ids`. Missing ids are silently
    /// omitted; consumed by sibling admin services.
    #[instrument(skip(self))]
    pub async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Group>, DomainError> {
        self.group_repo.get_by_ids(ids).await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Group, DomainError> {
        self.group_repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::GroupNotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn get_by_name(&self, name: &str) -> Result<Group, DomainError> {
        self.group_repo
            .get_by_name(name)
            .await?
            .ok_or_else(|| DomainError::GroupNotFoundByName(name.to_string()))
    }
}
