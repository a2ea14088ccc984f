use rbac_admin_infrastructure::repositories::{
    SqliteGroupRepository, SqliteResourceLookup, SqliteRoleLookup,
};
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub group: Arc<SqliteGroupRepository>,
    pub role: Arc<SqliteRoleLookup>,
    pub resource: Arc<SqliteResourceLookup>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            group: Arc::new(SqliteGroupRepository::new(pool.clone())),
            role: Arc::new(SqliteRoleLookup::new(pool.clone())),
            resource: Arc::new(SqliteResourceLookup::new(pool)),
        }
    }
}
