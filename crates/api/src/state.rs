use rbac_admin_application::use_cases::{
    CreateGroupUseCase, DeleteGroupUseCase, GetGroupsUseCase, UpdateGroupUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub create_group: Arc<CreateGroupUseCase>,
    pub get_groups: Arc<GetGroupsUseCase>,
    pub update_group: Arc<UpdateGroupUseCase>,
    pub delete_group: Arc<DeleteGroupUseCase>,
}
