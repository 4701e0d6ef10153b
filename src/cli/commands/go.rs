use crate::cli::parser::GoArgs;
use crate::core::{Context, Outcome};
use crate::utils::{ProjError, Result};

pub fn execute(ctx: &Context, args: GoArgs) -> Result<Outcome> {
    let name = args.validate()?;

    let record = ctx
        .registry
        .find(name)?
        .ok_or_else(|| ProjError::project_not_found(name))?;

    let target = ctx.expander.resolve(&record.directory)?;
    Ok(Outcome::ChangeDirectory(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::registry::ProjectRecord;
    use crate::test_utils::test_helpers::TestEnv;
    use std::fs;

    fn go_args(names: &[&str]) -> GoArgs {
        GoArgs {
            project: names.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_go_resolves_registered_directory() {
        let env = TestEnv::new();
        let dir = env.root().join("web");
        fs::create_dir_all(&dir).unwrap();
        env.registry()
            .append(&ProjectRecord::new("web", dir.to_string_lossy()))
            .unwrap();

        let outcome = execute(&env.context(), go_args(&["web"])).unwrap();
        assert_eq!(
            outcome,
            Outcome::ChangeDirectory(dir.canonicalize().unwrap())
        );
    }

    #[test]
    fn test_go_expands_home_relative_directory() {
        let env = TestEnv::new();
        fs::create_dir_all(env.home().join("notes")).unwrap();
        env.registry()
            .append(&ProjectRecord::new("notes", "~/notes"))
            .unwrap();

        let outcome = execute(&env.context(), go_args(&["notes"])).unwrap();
        assert_eq!(
            outcome.target().unwrap(),
            env.home().join("notes").canonicalize().unwrap()
        );
    }

    #[test]
    fn test_go_argument_count() {
        let env = TestEnv::new();
        assert!(matches!(
            execute(&env.context(), go_args(&[])),
            Err(ProjError::MissingArgument { .. })
        ));
        assert!(matches!(
            execute(&env.context(), go_args(&["a", "b"])),
            Err(ProjError::TooManyArguments { .. })
        ));
    }

    #[test]
    fn test_go_unknown_project() {
        let env = TestEnv::new();
        match execute(&env.context(), go_args(&["ghost"])) {
            Err(ProjError::ProjectNotFound { name }) => assert_eq!(name, "ghost"),
            other => panic!("expected ProjectNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_go_to_deleted_directory_fails() {
        let env = TestEnv::new();
        env.registry()
            .append(&ProjectRecord::new("gone", env.root().join("gone").to_string_lossy()))
            .unwrap();

        assert!(matches!(
            execute(&env.context(), go_args(&["gone"])),
            Err(ProjError::PathExpansion { .. })
        ));
    }
}
