use crate::utils::{ProjError, Result};
use std::env;
use std::path::{Component, Path, PathBuf};

/// Turns user-supplied directory strings (`~/src/app`, `$WORK/app`, `../app`)
/// into absolute paths.
///
/// `expand` only rewrites the string; `resolve` additionally requires the
/// directory to exist and returns its canonical form.
#[derive(Debug, Clone)]
pub struct PathExpander {
    home: Option<PathBuf>,
    cwd: PathBuf,
}

impl PathExpander {
    pub fn new(home: Option<PathBuf>, cwd: PathBuf) -> Self {
        Self { home, cwd }
    }

    pub fn from_env() -> Result<Self> {
        let home = directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        let cwd = env::current_dir()?;
        Ok(Self::new(home, cwd))
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn expand(&self, raw: &str) -> Result<PathBuf> {
        let home = self
            .home
            .as_ref()
            .map(|h| h.to_string_lossy().into_owned());

        let expanded = shellexpand::full_with_context(
            raw,
            || home.as_deref(),
            |var: &str| env::var(var).map(Some),
        )
        .map_err(|e| ProjError::path_expansion(raw, e.to_string()))?;

        let path = PathBuf::from(expanded.into_owned());
        let absolute = if path.is_absolute() {
            path
        } else {
            self.cwd.join(path)
        };

        debug_log(&format!("expanded {:?} to {}", raw, absolute.display()));
        Ok(normalize_path(&absolute))
    }

    pub fn resolve(&self, raw: &str) -> Result<PathBuf> {
        let expanded = self.expand(raw)?;

        let canonical = expanded
            .canonicalize()
            .map_err(|e| ProjError::path_expansion(raw, e.to_string()))?;

        if !canonical.is_dir() {
            return Err(ProjError::path_expansion(raw, "Not a directory"));
        }

        Ok(canonical)
    }
}

/// Lexical normalization; does not touch the filesystem or follow symlinks.
fn normalize_path(path: &Path) -> PathBuf {
    let mut components = vec![];

    for component in path.components() {
        match component {
            Component::ParentDir => {
                if components.len() > 1 {
                    components.pop();
                }
            }
            Component::Normal(c) => {
                components.push(c);
            }
            Component::RootDir => {
                components.clear();
                components.push(std::ffi::OsStr::new("/"));
            }
            Component::CurDir => {}
            Component::Prefix(_) => {}
        }
    }

    if components.is_empty() {
        PathBuf::from(".")
    } else {
        components.iter().collect()
    }
}

/// Debug logging helper
pub fn debug_log(message: &str) {
    if env::var("PROJ_DEBUG").is_ok() {
        eprintln!("[PROJ_DEBUG] {}", message);
    }
}
