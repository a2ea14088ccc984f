use async_trait::async_trait;
use rbac_admin_application::ports::RoleLookup;
use rbac_admin_domain::{DomainError, Role};
use sqlx::SqlitePool;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{error, instrument};

pub struct SqliteRoleLookup {
    pool: SqlitePool,
}

impl SqliteRoleLookup {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleLookup for SqliteRoleLookup {
    #[instrument(skip(self))]
    async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<Role>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "SELECT id, name FROM roles WHERE id IN ({}) ORDER BY id ASC",
            placeholders
        );

        let mut query = sqlx::query_as::<_, (i64, String)>(&sql);
        for id in ids {
            query = query.bind(id);
        }

        let rows = query.fetch_all(&self.pool).await.map_err(|e| {
            error!(error = %e, "Failed to query roles by ids");
            DomainError::DatabaseError(e.to_string())
        })?;

        let found: HashSet<i64> = rows.iter().map(|row| row.0).collect();
        if let Some(missing) = ids.iter().find(|id| !found.contains(id)) {
            return Err(DomainError::RoleNotFound(*missing));
        }

        Ok(rows
            .into_iter()
            .map(|(id, name)| Role {
                id: Some(id),
                name: Arc::from(name.as_str()),
            })
            .collect())
    }
}
