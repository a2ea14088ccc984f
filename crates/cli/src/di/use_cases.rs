use super::Repositories;
use rbac_admin_application::use_cases::{
    CreateGroupUseCase, DeleteGroupUseCase, GetGroupsUseCase, UpdateGroupUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub create_group: Arc<CreateGroupUseCase>,
    pub get_groups: Arc<GetGroupsUseCase>,
    pub update_group: Arc<UpdateGroupUseCase>,
    pub delete_group: Arc<DeleteGroupUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            create_group: Arc::new(CreateGroupUseCase::new(
                repos.group.clone(),
                repos.role.clone(),
                repos.resource.clone(),
            )),
            get_groups: Arc::new(GetGroupsUseCase::new(repos.group.clone())),
            update_group: Arc::new(UpdateGroupUseCase::new(
                repos.group.clone(),
                repos.role.clone(),
                repos.resource.clone(),
            )),
            delete_group: Arc::new(DeleteGroupUseCase::new(repos.group.clone())),
        }
    }
}
