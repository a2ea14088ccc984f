use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A role grantable through a group. Roles are administered by a sibling
/// service; this service only resolves and associates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: Option<i64>,
    pub name: Arc<str>,
}
