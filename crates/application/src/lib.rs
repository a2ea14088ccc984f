//! RBAC Admin Application Layer
pub mod params;
pub mod ports;
pub mod use_cases;

pub use params::GroupParam;
