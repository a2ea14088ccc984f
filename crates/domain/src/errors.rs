use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Group '{0}' already exists, name taken")]
    GroupNameTaken(String),

    #[error("Group not found: {0}")]
    GroupNotFound(i64),

    #[error("Group not found by name: {0}")]
    GroupNotFoundByName(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(i64),

    #[error("Role not found: {0}")]
    RoleNotFound(i64),

    #[error("No groups exist")]
    EmptyCollection,

    #[error("Invalid group name: {0}")]
    InvalidGroupName(String),

    #[error("Invalid id list: {0}")]
    InvalidIdList(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
