use crate::utils::{debug_log, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// What a command asks of the process that launched it.
///
/// A child process cannot move its parent shell; `ChangeDirectory` is handed
/// to the shell wrapper installed by `init`, which performs the `cd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    ChangeDirectory(PathBuf),
}

impl Outcome {
    pub fn target(&self) -> Option<&Path> {
        match self {
            Outcome::Done => None,
            Outcome::ChangeDirectory(path) => Some(path),
        }
    }
}

/// Hands the requested directory to the shell wrapper through the file it
/// named in `PROJ_CD_FILE`. The file holds the bare path without a newline.
pub fn write_cd_request(channel: &Path, target: &Path) -> Result<()> {
    debug_log(&format!(
        "Writing cd request {} to {}",
        target.display(),
        channel.display()
    ));
    fs::write(channel, target.to_string_lossy().as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_target() {
        assert_eq!(Outcome::Done.target(), None);
        let outcome = Outcome::ChangeDirectory(PathBuf::from("/srv/web"));
        assert_eq!(outcome.target(), Some(Path::new("/srv/web")));
    }

    #[test]
    fn test_write_cd_request_overwrites_channel() {
        let temp_dir = TempDir::new().unwrap();
        let channel = temp_dir.path().join("cd");
        fs::write(&channel, "stale contents that are longer").unwrap();

        write_cd_request(&channel, Path::new("/srv/web")).unwrap();
        assert_eq!(fs::read_to_string(&channel).unwrap(), "/srv/web");
    }
}
