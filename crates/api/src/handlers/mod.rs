pub mod groups;
mod health;

pub use health::health_check;
