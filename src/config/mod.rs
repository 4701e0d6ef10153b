use std::path::{Path, PathBuf};

pub mod defaults;
pub mod manager;

pub use manager::ConfigManager;

/// Settings read from the run-control file, fixed for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunControl {
    pub default_project_dir: PathBuf,
}

impl RunControl {
    pub fn default_project_dir(&self) -> &Path {
        &self.default_project_dir
    }
}
