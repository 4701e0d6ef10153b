use crate::config::defaults::{get_rc_file_path, get_registry_file_path};
use crate::config::{ConfigManager, RunControl};
use crate::core::registry::RegistryManager;
use crate::utils::{PathExpander, Printer, Result};
use std::path::{Path, PathBuf};

/// Facts about how the binary was started, known before any file is read.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub bin_name: String,
    pub command_line: String,
    pub printer: Printer,
    pub cd_channel: Option<PathBuf>,
}

impl Invocation {
    pub fn new(args: &[String], printer: Printer, cd_channel: Option<PathBuf>) -> Self {
        let bin_name = args
            .first()
            .and_then(|arg0| Path::new(arg0).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "proj".to_string());

        let command_line = std::iter::once(bin_name.clone())
            .chain(args.iter().skip(1).map(|arg| quote_arg(arg)))
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            bin_name,
            command_line,
            printer,
            cd_channel,
        }
    }

    pub fn from_env(args: &[String]) -> Self {
        let cd_channel = std::env::var_os("PROJ_CD_FILE")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::new(args, Printer::detect(), cd_channel)
    }
}

fn quote_arg(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./~:=@%+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Everything a command handler needs, built once per invocation.
pub struct Context {
    pub invocation: Invocation,
    pub run_control: RunControl,
    pub registry: RegistryManager,
    pub expander: PathExpander,
}

impl Context {
    pub fn new(
        invocation: Invocation,
        run_control: RunControl,
        registry: RegistryManager,
        expander: PathExpander,
    ) -> Self {
        Self {
            invocation,
            run_control,
            registry,
            expander,
        }
    }

    /// Reads the run-control file; a bad key stops here, before the
    /// registry is opened.
    pub fn load(invocation: Invocation) -> Result<Self> {
        let expander = PathExpander::from_env()?;
        let run_control = ConfigManager::load_from_path(&get_rc_file_path(), &expander)?;
        let registry = RegistryManager::new(get_registry_file_path());
        Ok(Self::new(invocation, run_control, registry, expander))
    }

    pub fn printer(&self) -> &Printer {
        &self.invocation.printer
    }

    pub fn bin_name(&self) -> &str {
        &self.invocation.bin_name
    }
}
