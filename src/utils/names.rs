use crate::utils::{ProjError, Result};
use regex::Regex;

/// Derives the directory-safe form of a project name.
///
/// Underscores already in the name are dropped, spaces become underscores,
/// anything outside `[A-Za-z0-9_]` is removed and the result is lowercased.
/// The slug only names the default directory; the registry keeps the
/// original name.
pub fn slugify(name: &str) -> Result<String> {
    let disallowed = Regex::new(r"[^A-Za-z0-9_]")
        .map_err(|e| ProjError::config_error(format!("Invalid regex: {}", e)))?;

    let spaced = name.replace('_', "").replace(' ', "_");
    Ok(disallowed.replace_all(&spaced, "").to_lowercase())
}

/// Checks that a name can be stored as a registry primary line and read back.
pub fn validate_project_name(name: &str) -> Result<()> {
    let first = match name.chars().next() {
        Some(c) => c,
        None => return Err(ProjError::missing_argument("start", "project name")),
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(ProjError::invalid_argument(
            "start",
            format!("{} (project names must start with a letter or underscore)", name),
        ));
    }

    if name.contains(':') {
        return Err(ProjError::invalid_argument(
            "start",
            format!("{} (project names cannot contain ':')", name),
        ));
    }

    if name.chars().any(char::is_control) {
        return Err(ProjError::invalid_argument(
            "start",
            format!("{:?} (project names cannot contain control characters)", name),
        ));
    }

    Ok(())
}
