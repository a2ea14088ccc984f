pub mod group;
pub mod page;

pub use group::{
    CreateGroupRequest, GroupListResponse, GroupResponse, ResourceResponse, RoleResponse,
    UpdateGroupRequest,
};
pub use page::PagedGroupsResponse;
