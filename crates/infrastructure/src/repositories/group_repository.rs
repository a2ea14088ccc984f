use async_trait::async_trait;
use rbac_admin_application::ports::GroupRepository;
use rbac_admin_domain::{DomainError, Group, Page, PageRequest, Resource, Role};
use sqlx::{SqliteConnection, SqlitePool};
use std::sync::Arc;
use tracing::{error, instrument};

type GroupRow = (i64, String, String, String);

const GROUP_SELECT: &str = "SELECT id, name, created_at, updated_at FROM groups";

pub struct SqliteGroupRepository {
    pool: SqlitePool,
}

impl SqliteGroupRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_group(row: GroupRow) -> Group {
        let (id, name, created_at, updated_at) = row;

        Group {
            id: Some(id),
            name: Arc::from(name.as_str()),
            resources: Vec::new(),
            roles: Vec::new(),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }

    async fn load_associations(&self, id: i64, group: &mut Group) -> Result<(), DomainError> {
        let resource_rows = sqlx::query_as::<_, (i64, String, String)>(
            "SELECT s.id, s.name, s.path FROM resources s
             JOIN group_resources gs ON gs.resource_id = s.id
             WHERE gs.group_id = ? ORDER BY s.name ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query group resources");
            DomainError::DatabaseError(e.to_string())
        })?;

        group.resources = resource_rows
            .into_iter()
            .map(|(id, name, path)| Resource {
                id: Some(id),
                name: Arc::from(name.as_str()),
                path: Arc::from(path.as_str()),
            })
            .collect();

        let role_rows = sqlx::query_as::<_, (i64, String)>(
            "SELECT r.id, r.name FROM roles r
             JOIN group_roles gr ON gr.role_id = r.id
             WHERE gr.group_id = ? ORDER BY r.name ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query group roles");
            DomainError::DatabaseError(e.to_string())
        })?;

        group.roles = role_rows
            .into_iter()
            .map(|(id, name)| Role {
                id: Some(id),
                name: Arc::from(name.as_str()),
            })
            .collect();

        Ok(())
    }
}

async fn insert_associations(
    conn: &mut SqliteConnection,
    group_id: i64,
    resources: &[Resource],
    roles: &[Role],
) -> Result<(), DomainError> {
    for resource in resources {
        sqlx::query("INSERT INTO group_resources (group_id, resource_id) VALUES (?, ?)")
            .bind(group_id)
            .bind(resource.id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to link resource to group");
                DomainError::DatabaseError(e.to_string())
            })?;
    }

    for role in roles {
        sqlx::query("INSERT INTO group_roles (group_id, role_id) VALUES (?, ?)")
            .bind(group_id)
            .bind(role.id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to link role to group");
                DomainError::DatabaseError(e.to_string())
            })?;
    }

    Ok(())
}

#[async_trait]
impl GroupRepository for SqliteGroupRepository {
    #[instrument(skip(self, resources, roles))]
    async fn create(
        &self,
        name: String,
        resources: Vec<Resource>,
        roles: Vec<Role>,
    ) -> Result<Group, DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        let row = sqlx::query_as::<_, GroupRow>(
            "INSERT INTO groups (name, created_at, updated_at)
             VALUES (?, ?, ?)
             RETURNING id, name, created_at, updated_at",
        )
        .bind(&name)
        .bind(&now)
        .bind(&now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                DomainError::GroupNameTaken(name.clone())
            } else {
                error!(error = %e, "Failed to create group");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        let id = row.0;
        insert_associations(&mut *tx, id, &resources, &roles).await?;

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit group create");
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut group = Self::row_to_group(row);
        group.resources = resources;
        group.roles = roles;
        Ok(group)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Group>, DomainError> {
        let row =
            sqlx::query_as::<_, GroupRow>(&format!("{} WHERE id = ?", GROUP_SELECT))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to query group by id");
                    DomainError::DatabaseError(e.to_string())
                })?;

        match row {
            Some(row) => {
                let mut group = Self::row_to_group(row);
                self.load_associations(id, &mut group).await?;
                Ok(Some(group))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn get_by_name(&self, name: &str) -> Result<Option<Group>, DomainError> {
        let row =
            sqlx::query_as::<_, GroupRow>(&format!("{} WHERE name = ?", GROUP_SELECT))
                .bind(name)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to query group by name");
                    DomainError::DatabaseError(e.to_string())
                })?;

        match row {
            Some(row) => {
                let id = row.0;
                let mut group = Self::row_to_group(row);
                self.load_associations(id, &mut group).await?;
                Ok(Some(group))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Group>, DomainError> {
        let rows =
            sqlx::query_as::<_, GroupRow>(&format!("{} ORDER BY name ASC", GROUP_SELECT))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to query all groups");
                    DomainError::DatabaseError(e.to_string())
                })?;

        let mut groups = Vec::with_capacity(rows.len());
        for row in rows {
            let id = row.0;
            let mut group = Self::row_to_group(row);
            self.load_associations(id, &mut group).await?;
            groups.push(group);
        }
        Ok(groups)
    }

    #[instrument(skip(self))]
    async fn get_page(&self, request: PageRequest) -> Result<Page<Group>, DomainError> {
        let size = request.clamped_size();

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM groups")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count groups");
                DomainError::DatabaseError(e.to_string())
            })?;

        let rows = sqlx::query_as::<_, GroupRow>(&format!(
            "{} ORDER BY name ASC LIMIT ? OFFSET ?",
            GROUP_SELECT
        ))
        .bind(i64::from(size))
        .bind(request.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query group page");
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let id = row.0;
            let mut group = Self::row_to_group(row);
            self.load_associations(id, &mut group).await?;
            items.push(group);
        }

        Ok(Page {
            items,
            total: total.0 as u64,
            page: request.page,
            size,
        })
    }

    #[instrument(skip(self))]
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Group>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("{} WHERE id IN ({}) ORDER BY id ASC", GROUP_SELECT, placeholders);

        let mut query = sqlx::query_as::<_, GroupRow>(&sql);
        for id in ids {
            query = query.bind(id);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to query groups by ids");
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut groups = Vec::with_capacity(rows.len());
        for row in rows {
            let id = row.0;
            let mut group = Self::row_to_group(row);
            self.load_associations(id, &mut group).await?;
            groups.push(group);
        }
        Ok(groups)
    }

    #[instrument(skip(self, resources, roles))]
    async fn update(
        &self,
        id: i64,
        name: String,
        resources: Vec<Resource>,
        roles: Vec<Role>,
    ) -> Result<Group, DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        let row = sqlx::query_as::<_, GroupRow>(
            "UPDATE groups SET name = ?, updated_at = ?
             WHERE id = ?
             RETURNING id, name, created_at, updated_at",
        )
        .bind(&name)
        .bind(&now)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                DomainError::GroupNameTaken(name.clone())
            } else {
                error!(error = %e, "Failed to update group");
                DomainError::DatabaseError(e.to_string())
            }
        })?;

        let row = row.ok_or(DomainError::GroupNotFound(id))?;

        for table in ["group_resources", "group_roles"] {
            sqlx::query(&format!("DELETE FROM {} WHERE group_id = ?", table))
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    error!(error = %e, "Failed to clear group associations");
                    DomainError::DatabaseError(e.to_string())
                })?;
        }

        insert_associations(&mut *tx, id, &resources, &roles).await?;

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit group update");
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut group = Self::row_to_group(row);
        group.resources = resources;
        group.roles = roles;
        Ok(group)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM groups WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete group");
                DomainError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::GroupNotFound(id));
        }

        Ok(())
    }
}
