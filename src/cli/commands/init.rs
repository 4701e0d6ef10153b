use chrono::Local;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::parser::{InitArgs, Shell};
use crate::core::Outcome;
use crate::utils::{debug_log, ProjError, Result};

const BEGIN_MARKER: &str = "# >>> proj shell integration >>>";
const END_MARKER: &str = "# <<< proj shell integration <<<";

pub fn execute(args: InitArgs, bin_name: &str) -> Result<Outcome> {
    let shell = match args.shell {
        Some(shell) => shell,
        None => detect_shell()?,
    };

    if !args.install {
        print!("{}", wrapper_script(shell, bin_name));
        return Ok(Outcome::Done);
    }

    let config_path = get_shell_config_path(shell)?;
    println!("Detected shell: {:?}", shell);
    println!("Config file: {}", config_path.display());

    if is_integration_installed(&config_path)? {
        println!("\nShell integration is already installed.");
        return Ok(Outcome::Done);
    }

    if let Some(backup_path) = create_backup(&config_path)? {
        println!("Created backup: {}", backup_path.display());
    }

    install_integration(&config_path, shell, bin_name)?;

    println!("\nShell integration installed. Reload it with:");
    println!("  source {}", config_path.display());
    Ok(Outcome::Done)
}

/// Shell function that runs the binary and performs any `cd` it requests
/// through the file named by `PROJ_CD_FILE`.
pub fn wrapper_script(shell: Shell, bin_name: &str) -> String {
    match shell {
        Shell::Fish => format!(
            "function {bin}
    set -l __proj_cd_file (mktemp)
    or return 1
    env PROJ_CD_FILE=$__proj_cd_file command {bin} $argv
    set -l __proj_status $status
    if test -s $__proj_cd_file
        cd (cat $__proj_cd_file)
        or set __proj_status $status
    end
    rm -f $__proj_cd_file
    return $__proj_status
end
",
            bin = bin_name
        ),
        Shell::Bash | Shell::Zsh => format!(
            "{bin}() {{
    local __proj_cd_file __proj_status
    __proj_cd_file=\"$(mktemp \"${{TMPDIR:-/tmp}}/proj-cd.XXXXXX\")\" || return 1
    PROJ_CD_FILE=\"$__proj_cd_file\" command {bin} \"$@\"
    __proj_status=$?
    if [ -s \"$__proj_cd_file\" ]; then
        cd -- \"$(cat \"$__proj_cd_file\")\" || __proj_status=$?
    fi
    rm -f -- \"$__proj_cd_file\"
    return $__proj_status
}}
",
            bin = bin_name
        ),
    }
}

fn detect_shell() -> Result<Shell> {
    env::var("SHELL")
        .ok()
        .and_then(|shell| parse_shell_from_path(&shell))
        .ok_or_else(|| {
            ProjError::config_error(
                "Cannot detect shell from $SHELL; pass one of: bash, zsh, fish",
            )
        })
}

fn parse_shell_from_path(path: &str) -> Option<Shell> {
    let shell_name = Path::new(path).file_name()?.to_str()?;
    match shell_name {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        _ => None,
    }
}

fn get_shell_config_path(shell: Shell) -> Result<PathBuf> {
    let home_path = directories::BaseDirs::new()
        .ok_or_else(|| ProjError::config_error("Unable to determine home directory"))?
        .home_dir()
        .to_path_buf();

    let config_path = match shell {
        Shell::Bash => home_path.join(".bashrc"),
        Shell::Zsh => home_path.join(".zshrc"),
        Shell::Fish => home_path.join(".config/fish/config.fish"),
    };

    if shell == Shell::Fish {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
    }

    Ok(config_path)
}

fn is_integration_installed(config_path: &Path) -> Result<bool> {
    if !config_path.exists() {
        return Ok(false);
    }

    let content = fs::read_to_string(config_path)?;
    Ok(content.contains(BEGIN_MARKER))
}

fn create_backup(config_path: &Path) -> Result<Option<PathBuf>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let file_name = config_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            ProjError::config_error(format!("Not a file path: {}", config_path.display()))
        })?;
    let timestamp = Local::now().format("%Y%m%d-%H%M%S");
    let backup_path = config_path.with_file_name(format!("{}.proj-backup-{}", file_name, timestamp));

    fs::copy(config_path, &backup_path)?;
    debug_log(&format!("Backed up {} to {}", config_path.display(), backup_path.display()));
    Ok(Some(backup_path))
}

fn integration_block(shell: Shell, bin_name: &str) -> String {
    let shell_name = match shell {
        Shell::Bash => "bash",
        Shell::Zsh => "zsh",
        Shell::Fish => "fish",
    };

    let body = match shell {
        Shell::Fish => format!("command {} init fish | source", bin_name),
        _ => format!("eval \"$(command {} init {})\"", bin_name, shell_name),
    };

    format!("\n{}\n{}\n{}\n", BEGIN_MARKER, body, END_MARKER)
}

fn install_integration(config_path: &Path, shell: Shell, bin_name: &str) -> Result<()> {
    let mut content = if config_path.exists() {
        fs::read_to_string(config_path)?
    } else {
        String::new()
    };

    content.push_str(&integration_block(shell, bin_name));
    fs::write(config_path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_shell_from_path() {
        assert_eq!(parse_shell_from_path("/bin/bash"), Some(Shell::Bash));
        assert_eq!(parse_shell_from_path("/usr/bin/zsh"), Some(Shell::Zsh));
        assert_eq!(
            parse_shell_from_path("/usr/local/bin/fish"),
            Some(Shell::Fish)
        );
        assert_eq!(parse_shell_from_path("/bin/sh"), None);
        assert_eq!(parse_shell_from_path("bash"), Some(Shell::Bash));
    }

    #[test]
    fn test_wrapper_script_uses_cd_channel() {
        let posix = wrapper_script(Shell::Bash, "pj");
        assert!(posix.starts_with("pj() {"));
        assert!(posix.contains("PROJ_CD_FILE=\"$__proj_cd_file\" command pj \"$@\""));
        assert!(posix.contains("cd -- "));

        let fish = wrapper_script(Shell::Fish, "pj");
        assert!(fish.starts_with("function pj"));
        assert!(fish.contains("env PROJ_CD_FILE=$__proj_cd_file command pj $argv"));
        assert!(fish.trim_end().ends_with("end"));
    }

    #[test]
    fn test_is_integration_installed() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".bashrc");

        assert!(!is_integration_installed(&config_path).unwrap());

        fs::write(&config_path, "# Some config\n").unwrap();
        assert!(!is_integration_installed(&config_path).unwrap());

        install_integration(&config_path, Shell::Bash, "proj").unwrap();
        assert!(is_integration_installed(&config_path).unwrap());
    }

    #[test]
    fn test_create_backup() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".bashrc");

        assert!(create_backup(&config_path).unwrap().is_none());

        fs::write(&config_path, "test content").unwrap();
        let backup = create_backup(&config_path).unwrap().unwrap();
        assert!(backup.to_string_lossy().contains(".bashrc.proj-backup-"));
        assert_eq!(fs::read_to_string(&backup).unwrap(), "test content");
    }

    #[test]
    fn test_install_integration_appends_block() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join(".zshrc");
        fs::write(&config_path, "export PATH=$PATH:/usr/local/bin\n").unwrap();

        install_integration(&config_path, Shell::Zsh, "proj").unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.starts_with("export PATH=$PATH:/usr/local/bin\n"));
        assert!(content.contains(BEGIN_MARKER));
        assert!(content.contains("eval \"$(command proj init zsh)\""));
        assert!(content.contains(END_MARKER));
    }

    #[test]
    fn test_install_integration_fish() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.fish");

        install_integration(&config_path, Shell::Fish, "proj").unwrap();

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("command proj init fish | source"));
    }
}
