use serde::Serialize;

use super::GroupResponse;

/// Bundled page envelope: one page of groups plus the whole-collection
/// total and the echoed page parameters.
#[derive(Debug, Clone, Serialize)]
pub struct PagedGroupsResponse {
    pub message: String,
    pub data: Vec<GroupResponse>,
    pub total: u64,
    pub page: u32,
    pub size: u32,
}
