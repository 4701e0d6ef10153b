pub mod test_helpers {
    use crate::config::RunControl;
    use crate::core::registry::RegistryManager;
    use crate::core::{Context, Invocation};
    use crate::utils::{PathExpander, Printer};
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// A throwaway home, registry and project root under one temp dir.
    ///
    /// Layout: `<root>/home` is `~`, `<root>/home/projects` is the default
    /// project directory, and the registry lives at `<root>/config/projects`.
    pub struct TestEnv {
        temp_dir: TempDir,
    }

    impl TestEnv {
        pub fn new() -> Self {
            let temp_dir = TempDir::new().expect("Failed to create temp dir");
            fs::create_dir_all(temp_dir.path().join("home")).expect("Failed to create home");
            Self { temp_dir }
        }

        pub fn root(&self) -> &Path {
            self.temp_dir.path()
        }

        pub fn home(&self) -> PathBuf {
            self.root().join("home")
        }

        pub fn projects_dir(&self) -> PathBuf {
            self.home().join("projects")
        }

        pub fn registry_path(&self) -> PathBuf {
            self.root().join("config").join("projects")
        }

        pub fn registry(&self) -> RegistryManager {
            RegistryManager::new(self.registry_path())
        }

        pub fn context(&self) -> Context {
            self.context_for(&["proj"])
        }

        pub fn context_for(&self, args: &[&str]) -> Context {
            let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
            let invocation = Invocation::new(&args, Printer::plain(), None);
            let run_control = RunControl {
                default_project_dir: self.projects_dir(),
            };
            let expander = PathExpander::new(Some(self.home()), self.root().to_path_buf());
            Context::new(invocation, run_control, self.registry(), expander)
        }
    }

    impl Default for TestEnv {
        fn default() -> Self {
            Self::new()
        }
    }
}
