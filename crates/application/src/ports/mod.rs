mod group_repository;
mod resource_lookup;
mod role_lookup;

pub use group_repository::GroupRepository;
pub use resource_lookup::ResourceLookup;
pub use role_lookup::RoleLookup;
