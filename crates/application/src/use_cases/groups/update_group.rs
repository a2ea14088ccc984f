use rbac_admin_domain::{DomainError, Group};
use std::sync::Arc;
use tracing::{info, instrument};

use super::resolve_associations;
use crate::params::GroupParam;
use crate::ports::{GroupRepository, ResourceLookup, RoleLookup};

/// Use case for updating a group in place.
///
/// The target row is the explicit `id` argument; the write is a full
/// replacement of the name and both association sets.
pub struct UpdateGroupUseCase {
    group_repo: Arc<dyn GroupRepository>,
    role_lookup: Arc<dyn RoleLookup>,
    resource_lookup: Arc<dyn ResourceLookup>,
}

impl UpdateGroupUseCase {
    pub fn new(
        group_repo: Arc<dyn GroupRepository>,
        role_lookup: Arc<dyn RoleLookup>,
        resource_lookup: Arc<dyn ResourceLookup>,
    ) -> Self {
        Self {
            group_repo,
            role_lookup,
            resource_lookup,
        }
    }

    /// Updates the group `id`.
    ///
    /// # Errors
    ///
    /// * `DomainError::GroupNotFound` - If `id` does not reference an
    ///   existing group; nothing is written in that case
    /// * `DomainError::GroupNameTaken` - If renaming to another group's name
    /// * `DomainError::ResourceNotFound` / `DomainError::RoleNotFound` - If
    ///   an association id does not resolve
    /// * `DomainError::InvalidGroupName` / `DomainError::InvalidIdList` -
    ///   Validation failures
    /// * `DomainError::DatabaseError` - If a database error occurs
    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64, param: GroupParam) -> Result<Group, DomainError> {
        Group::validate_name(&param.name)?;

        self.group_repo
            .get_by_id(id)
            .await?
            .ok_or(DomainError::GroupNotFound(id))?;

        // Renaming onto another group's name fails the same way create does.
        if let Some(existing) = self.group_repo.get_by_name(&param.name).await? {
            if existing.id != Some(id) {
                return Err(DomainError::GroupNameTaken(param.name));
            }
        }

        let (resources, roles) =
            resolve_associations(&self.resource_lookup, &self.role_lookup, &param).await?;

        let group = self
            .group_repo
            .update(id, param.name, resources, roles)
            .await?;

        info!(
            group_id = id,
            name = %group.name,
            "Group updated successfully"
        );

        Ok(group)
    }
}
