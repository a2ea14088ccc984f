mod mock_repositories;

pub use mock_repositories::{MockGroupRepository, MockResourceLookup, MockRoleLookup};
