pub mod groups;

pub use groups::{CreateGroupUseCase, DeleteGroupUseCase, GetGroupsUseCase, UpdateGroupUseCase};
