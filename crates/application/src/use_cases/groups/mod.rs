mod create_group;
mod delete_group;
mod get_groups;
mod update_group;

pub use create_group::CreateGroupUseCase;
pub use delete_group::DeleteGroupUseCase;
pub use get_groups::GetGroupsUseCase;
pub use update_group::UpdateGroupUseCase;

use rbac_admin_domain::{DomainError, Resource, Role};
use std::sync::Arc;

use crate::params::GroupParam;
use crate::ports::{ResourceLookup, RoleLookup};

/// Resolves the association id lists of a param against the lookup
/// services. All-or-nothing: one unresolved id fails the whole resolution,
/// so a group never ends up with a partial association set.
async fn resolve_associations(
    resource_lookup: &Arc<dyn ResourceLookup>,
    role_lookup: &Arc<dyn RoleLookup>,
    param: &GroupParam,
) -> Result<(Vec<Resource>, Vec<Role>), DomainError> {
    let resource_ids = param.resource_id_list()?;
    let resources = if resource_ids.is_empty() {
        Vec::new()
    } else {
        resource_lookup.get_by_ids(&resource_ids).await?
    };

    let role_ids = param.role_id_list()?;
    let roles = if role_ids.is_empty() {
        Vec::new()
    } else {
        role_lookup.get_by_ids(&role_ids).await?
    };

    Ok((resources, roles))
}
