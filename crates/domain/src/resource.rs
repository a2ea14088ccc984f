use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A protected resource (typically an URL path) grantable through a group.
/// Administered by a sibling service; read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: Option<i64>,
    pub name: Arc<str>,
    pub path: Arc<str>,
}
