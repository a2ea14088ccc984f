pub mod group_repository;
pub mod resource_lookup;
pub mod role_lookup;

pub use group_repository::SqliteGroupRepository;
pub use resource_lookup::SqliteResourceLookup;
pub use role_lookup::SqliteRoleLookup;
