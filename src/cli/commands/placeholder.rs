use crate::core::Outcome;
use crate::utils::{debug_log, ProjError, Result};

/// Commands that are announced but not built yet. They report through the
/// error path so the dispatcher prints their usage, and exit successfully.
pub fn execute(command: &str) -> Result<Outcome> {
    debug_log(&format!("{} invoked; not implemented", command));
    Err(ProjError::not_implemented(command, command))
}
