//! RBAC Admin Domain Layer
pub mod config;
pub mod errors;
pub mod group;
pub mod page;
pub mod resource;
pub mod role;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use group::Group;
pub use page::{Page, PageRequest};
pub use resource::Resource;
pub use role::Role;
