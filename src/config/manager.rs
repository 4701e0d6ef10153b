use super::defaults::default_run_control;
use super::RunControl;
use crate::utils::{debug_log, PathExpander, ProjError, Result};
use std::fs;
use std::path::Path;

pub struct ConfigManager;

impl ConfigManager {
    /// A missing file yields the defaults; any unknown key is fatal.
    pub fn load_from_path(path: &Path, expander: &PathExpander) -> Result<RunControl> {
        if !path.exists() {
            debug_log(&format!(
                "No run-control file at {}, using defaults",
                path.display()
            ));
            return default_run_control(expander);
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ProjError::config_error(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse(&content, &path.to_string_lossy(), expander)
    }

    pub fn parse(content: &str, origin: &str, expander: &PathExpander) -> Result<RunControl> {
        let mut run_control = default_run_control(expander)?;

        for (index, raw_line) in content.lines().enumerate() {
            let line_number = index + 1;
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| {
                ProjError::config_parse(origin, line_number, "expected `key = value`")
            })?;
            let (key, value) = (key.trim(), value.trim());

            match key {
                "default_project_dir" => {
                    if value.is_empty() {
                        return Err(ProjError::config_parse(
                            origin,
                            line_number,
                            "missing value for default_project_dir",
                        ));
                    }
                    run_control.default_project_dir = expander.expand(value).map_err(|e| {
                        ProjError::config_parse(origin, line_number, e.to_string())
                    })?;
                }
                _ => {
                    return Err(ProjError::config_parse(
                        origin,
                        line_number,
                        format!("unknown key \"{}\"", key),
                    ));
                }
            }
        }

        debug_log(&format!(
            "Loaded run control from {}: default_project_dir={}",
            origin,
            run_control.default_project_dir.display()
        ));
        Ok(run_control)
    }
}
