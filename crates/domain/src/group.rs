use crate::{DomainError, Resource, Role};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Maximum accepted length for a group name
const MAX_NAME_LEN: usize = 100;

/// An access-control group: a named bundle of roles and resources that can
/// be granted to users as one unit. The name is the natural lookup key and
/// is unique across all groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Option<i64>,
    pub name: Arc<str>,
    pub resources: Vec<Resource>,
    pub roles: Vec<Role>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Group {
    pub fn new(name: Arc<str>) -> Self {
        Self {
            id: None,
            name,
            resources: Vec::new(),
            roles: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidGroupName(
                "Group name cannot be empty".to_string(),
            ));
        }
        if name.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidGroupName(format!(
                "Group name cannot exceed {} characters",
                MAX_NAME_LEN
            )));
        }
        Ok(())
    }
}
