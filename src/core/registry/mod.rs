pub mod format;
pub mod manager;
pub mod record;

pub use manager::RegistryManager;
pub use record::{find_by_name, ProjectRecord};
