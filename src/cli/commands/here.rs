use crate::cli::usage;
use crate::core::registry::ProjectRecord;
use crate::core::{Context, Outcome};
use crate::utils::{debug_log, PathExpander, Result};

/// Bare invocation: name the project the shell is standing in, or show help.
pub fn execute(ctx: &Context) -> Result<Outcome> {
    let records = ctx.registry.load()?;

    match current_project(&records, &ctx.expander) {
        Some(record) => println!("\"{}\" at {}", record.name, record.directory),
        None => print!("{}", usage::top_level(ctx.bin_name())),
    }

    Ok(Outcome::Done)
}

/// The registered project whose directory most closely contains the
/// current directory. Records whose directory no longer resolves are skipped.
pub fn current_project<'a>(
    records: &'a [ProjectRecord],
    expander: &PathExpander,
) -> Option<&'a ProjectRecord> {
    let cwd = expander.cwd().canonicalize().ok()?;

    records
        .iter()
        .filter_map(|record| match expander.resolve(&record.directory) {
            Ok(dir) => Some((record, dir)),
            Err(e) => {
                debug_log(&format!("Skipping {}: {}", record.name, e));
                None
            }
        })
        .filter(|(_, dir)| cwd.starts_with(dir))
        .max_by_key(|(_, dir)| dir.components().count())
        .map(|(record, _)| record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn record_for(name: &str, dir: &Path) -> ProjectRecord {
        ProjectRecord::new(name, dir.to_string_lossy())
    }

    #[test]
    fn test_current_project_picks_deepest_match() {
        let temp = TempDir::new().unwrap();
        let outer = temp.path().join("outer");
        let inner = outer.join("inner");
        let deep = inner.join("src/bin");
        fs::create_dir_all(&deep).unwrap();

        let records = vec![
            record_for("outer", &outer),
            record_for("inner", &inner),
            record_for("missing", &temp.path().join("missing")),
        ];

        let expander = PathExpander::new(None, deep.clone());
        assert_eq!(current_project(&records, &expander).unwrap().name, "inner");

        let expander = PathExpander::new(None, outer.clone());
        assert_eq!(current_project(&records, &expander).unwrap().name, "outer");
    }

    #[test]
    fn test_current_project_outside_any_project() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        let elsewhere = temp.path().join("project-two");
        fs::create_dir_all(&project).unwrap();
        fs::create_dir_all(&elsewhere).unwrap();

        let records = vec![record_for("project", &project)];
        let expander = PathExpander::new(None, elsewhere);
        assert!(current_project(&records, &expander).is_none());
    }
}
