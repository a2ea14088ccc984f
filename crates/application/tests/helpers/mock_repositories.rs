#![allow(dead_code)]

use async_trait::async_trait;
use rbac_admin_application::ports::{GroupRepository, ResourceLookup, RoleLookup};
use rbac_admin_domain::{DomainError, Group, Page, PageRequest, Resource, Role};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

const MOCK_TIMESTAMP: &str = "2026-01-01 00:00:00";

pub struct MockGroupRepository {
    groups: RwLock<HashMap<i64, Group>>,
    next_id: RwLock<i64>,
    write_count: RwLock<u64>,
}

impl MockGroupRepository {
    pub fn new() -> Self {
        Self {
            groups: RwLock::new(HashMap::new()),
            next_id: RwLock::new(1),
            write_count: RwLock::new(0),
        }
    }

    pub async fn count(&self) -> usize {
        self.groups.read().await.len()
    }

    /// Number of mutating calls that reached the store.
    pub async fn write_count(&self) -> u64 {
        *self.write_count.read().await
    }
}

impl Default for MockGroupRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GroupRepository for MockGroupRepository {
    async fn create(
        &self,
        name: String,
        resources: Vec<Resource>,
        roles: Vec<Role>,
    ) -> Result<Group, DomainError> {
        let mut groups = self.groups.write().await;
        if groups.values().any(|g| g.name.as_ref() == name) {
            return Err(DomainError::GroupNameTaken(name));
        }

        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;

        let group = Group {
            id: Some(id),
            name: Arc::from(name.as_str()),
            resources,
            roles,
            created_at: Some(MOCK_TIMESTAMP.to_string()),
            updated_at: Some(MOCK_TIMESTAMP.to_string()),
        };
        groups.insert(id, group.clone());
        *self.write_count.write().await += 1;
        Ok(group)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Group>, DomainError> {
        Ok(self.groups.read().await.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Group>, DomainError> {
        Ok(self
            .groups
            .read()
            .await
            .values()
            .find(|g| g.name.as_ref() == name)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Group>, DomainError> {
        let mut groups: Vec<Group> = self.groups.read().await.values().cloned().collect();
        groups.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(groups)
    }

    async fn get_page(&self, request: PageRequest) -> Result<Page<Group>, DomainError> {
        let mut groups: Vec<Group> = self.groups.read().await.values().cloned().collect();
        groups.sort_by(|a, b| a.name.cmp(&b.name));

        let total = groups.len() as u64;
        let size = request.clamped_size();
        let items = groups
            .into_iter()
            .skip(request.offset() as usize)
            .take(size as usize)
            .collect();

        Ok(Page {
            items,
            total,
            page: request.page,
            size,
        })
    }

    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Group>, DomainError> {
        let groups = self.groups.read().await;
        Ok(ids.iter().filter_map(|id| groups.get(id).cloned()).collect())
    }

    async fn update(
        &self,
        id: i64,
        name: String,
        resources: Vec<Resource>,
        roles: Vec<Role>,
    ) -> Result<Group, DomainError> {
        let mut groups = self.groups.write().await;
        let group = groups
            .get_mut(&id)
            .ok_or(DomainError::GroupNotFound(id))?;

        group.name = Arc::from(name.as_str());
        group.resources = resources;
        group.roles = roles;
        group.updated_at = Some(MOCK_TIMESTAMP.to_string());

        let updated = group.clone();
        *self.write_count.write().await += 1;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut groups = self.groups.write().await;
        if groups.remove(&id).is_none() {
            return Err(DomainError::GroupNotFound(id));
        }
        *self.write_count.write().await += 1;
        Ok(())
    }
}

pub struct MockRoleLookup {
    roles: RwLock<HashMap<i64, Role>>,
}

impl MockRoleLookup {
    pub fn new() -> Self {
        Self {
            roles: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, id: i64, name: &str) {
        self.roles.write().await.insert(
            id,
            Role {
                id: Some(id),
                name: Arc::from(name),
            },
        );
    }
}

impl Default for MockRoleLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleLookup for MockRoleLookup {
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Role>, DomainError> {
        let roles = self.roles.read().await;
        ids.iter()
            .map(|id| roles.get(id).cloned().ok_or(DomainError::RoleNotFound(*id)))
            .collect()
    }
}

pub struct MockResourceLookup {
    resources: RwLock<HashMap<i64, Resource>>,
}

impl MockResourceLookup {
    pub fn new() -> Self {
        Self {
            resources: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, id: i64, name: &str, path: &str) {
        self.resources.write().await.insert(
            id,
            Resource {
                id: Some(id),
                name: Arc::from(name),
                path: Arc::from(path),
            },
        );
    }
}

impl Default for MockResourceLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceLookup for MockResourceLookup {
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Resource>, DomainError> {
        let resources = self.resources.read().await;
        ids.iter()
            .map(|id| {
                resources
                    .get(id)
                    .cloned()
                    .ok_or(DomainError::ResourceNotFound(*id))
            })
            .collect()
    }
}
