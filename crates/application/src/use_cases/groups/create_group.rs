use rbac_admin_domain::{DomainError, Group};
use std::sync::Arc;
use tracing::{info, instrument};

use super::resolve_associations;
use crate::params::GroupParam;
use crate::ports::{GroupRepository, ResourceLookup, RoleLookup};

/// Use case for creating a new group.
///
/// Validates the name, checks it is not already taken, resolves the
/// requested role and resource associations, then persists the group.
pub struct CreateGroupUseCase {
    group_repo: Arc<dyn GroupRepository>,
    role_lookup: Arc<dyn RoleLookup>,
    resource_lookup: Arc<dyn ResourceLookup>,
}

impl CreateGroupUseCase {
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

    /// Creates a new group.
    ///
    /// # Errors
    ///
    /// * `DomainError::InvalidGroupName` - If the name is blank or too long
    /// * `DomainError::GroupNameTaken` - If a group with this name exists
    /// * `DomainError::ResourceNotFound` / `DomainError::RoleNotFound` - If
    ///   an association id does not resolve
    /// * `DomainError::InvalidIdList` - If an id list fails to parse
    /// * `DomainError::DatabaseError` - If a database error occurs
    #[instrument(skip(self))]
    pub async fn execute(&self, param: GroupParam) -> Result<Group, DomainError> {
        Group::validate_name(&param.name)?;

        if self.group_repo.get_by_name(&param.name).await?.is_some() {
            return Err(DomainError::GroupNameTaken(param.name));
        }

        let (resources, roles) =
            resolve_associations(&self.resource_lookup, &self.role_lookup, &param).await?;

        let group = self.group_repo.create(param.name, resources, roles).await?;

        info!(
            group_id = ?group.id,
            name = %group.name,
            "Group created successfully"
        );

        Ok(group)
    }
}
