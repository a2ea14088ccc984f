use rbac_admin_domain::{Group, Resource, Role};
use serde::{Deserialize, Serialize};

/// Response DTO for group information. `message` is carried on mutation
/// responses only.
#[derive(Debug, Clone, Serialize)]
pub struct GroupResponse {
    pub id: i64,
    pub name: String,
    pub resources: Vec<ResourceResponse>,
    pub roles: Vec<RoleResponse>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GroupResponse {
    pub fn from_group(group: Group, message: Option<String>) -> Self {
        Self {
            id: group.id.unwrap_or(0),
            name: group.name.to_string(),
            resources: group
                .resources
                .into_iter()
                .map(ResourceResponse::from_resource)
                .collect(),
            roles: group.roles.into_iter().map(RoleResponse::from_role).collect(),
            created_at: group.created_at,
            updated_at: group.updated_at,
            message,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleResponse {
    pub id: i64,
    pub name: String,
}

impl RoleResponse {
    pub fn from_role(role: Role) -> Self {
        Self {
            id: role.id.unwrap_or(0),
            name: role.name.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceResponse {
    pub id: i64,
    pub name: String,
    pub path: String,
}

impl ResourceResponse {
    pub fn from_resource(resource: Resource) -> Self {
        Self {
            id: resource.id.unwrap_or(0),
            name: resource.name.to_string(),
            path: resource.path.to_string(),
        }
    }
}

/// Request DTO for creating a group. The id lists keep the comma-delimited
/// admin-console format ("1, 2,3"; blanks ignored).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGroupRequest {
    pub name: String,
    pub resource_ids: Option<String>,
    pub role_ids: Option<String>,
}

/// Request DTO for updating a group. The write is a full replacement, so
/// the same fields as on create.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGroupRequest {
    pub name: String,
    pub resource_ids: Option<String>,
    pub role_ids: Option<String>,
}

/// Bundled list envelope.
#[derive(Debug, Clone, Serialize)]
pub struct GroupListResponse {
    pub message: String,
    pub groups: Vec<GroupResponse>,
}
