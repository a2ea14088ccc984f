use rbac_admin_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::GroupRepository;

/// Use case for permanently deleting a group. Association rows go with it;
/// the roles and resources themselves are untouched.
pub struct DeleteGroupUseCase {
    group_repo: Arc<dyn GroupRepository>,
}

impl DeleteGroupUseCase {
    pub fn new(group_repo: Arc<dyn GroupRepository>) -> Self {
        Self { group_repo }
    }

    /// Deletes the group `id`.
    ///
    /// # Errors
    ///
    /// * `DomainError::GroupNotFound` - If the group doesn't exist; the
    ///   store is left unchanged
    /// * `DomainError::DatabaseError` - If a database error occurs
    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        let group = self
            .group_repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::GroupNotFound(id))?;

        self.group_repo.delete(id).await?;

        info!(
            group_id = id,
            name = %group.name,
            "Group deleted successfully"
        );

        Ok(())
    }
}
