use super::RunControl;
use crate::utils::{PathExpander, Result};
use std::path::PathBuf;

pub const DEFAULT_PROJECT_DIR: &str = "~/projects";
pub const RC_FILE_NAME: &str = ".prc";
pub const REGISTRY_FILE_NAME: &str = "projects";

pub fn default_run_control(expander: &PathExpander) -> Result<RunControl> {
    Ok(RunControl {
        default_project_dir: expander.expand(DEFAULT_PROJECT_DIR)?,
    })
}

fn home_dir() -> PathBuf {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn get_default_config_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "proj") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        home_dir().join(".config").join("proj")
    }
}

pub fn get_config_dir() -> PathBuf {
    // Allow environment variable override for the registry location (used in tests)
    if let Ok(config_dir) = std::env::var("PROJ_CONFIG_DIR") {
        return PathBuf::from(config_dir);
    }

    get_default_config_dir()
}

pub fn get_registry_file_path() -> PathBuf {
    get_config_dir().join(REGISTRY_FILE_NAME)
}

pub fn get_rc_file_path() -> PathBuf {
    if let Ok(rc_path) = std::env::var("PROJ_RC") {
        return PathBuf::from(rc_path);
    }

    home_dir().join(RC_FILE_NAME)
}
