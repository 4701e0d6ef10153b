use crate::utils::{validate_project_name, ProjError, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "proj")]
#[command(about = "Register, list and jump between project directories")]
#[command(
    version,
    disable_help_subcommand = true,
    long_about = "Register, list and jump between project directories.\n\n\
        When run without a command inside a registered project, prints that project; \
        otherwise prints this help.\n\n\
        `go` and `start --cd` change the directory of the calling shell, which needs \
        the wrapper function printed by `init`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show help for proj or one of its commands
    #[command(visible_alias = "h")]
    Help(HelpArgs),
    /// Archive a project (in development)
    #[command(visible_alias = "ar")]
    Archive(ArchiveArgs),
    /// Copy a project (in development)
    #[command(visible_alias = "cp")]
    Copy(CopyArgs),
    /// Dump the registry for backup (in development)
    #[command(visible_alias = "d")]
    Dump(DumpArgs),
    /// Change to a project's directory
    #[command(visible_alias = "g")]
    Go(GoArgs),
    /// List registered projects
    #[command(visible_alias = "ls")]
    List(ListArgs),
    /// Restore projects from a dump (in development)
    #[command(visible_alias = "r")]
    Restore(RestoreArgs),
    /// Create and register a new project
    #[command(visible_alias = "s")]
    Start(StartArgs),
    /// Track tasks for the current project (in development)
    #[command(visible_alias = "t")]
    Todo(TodoArgs),
    /// Print or install the shell function that lets proj change directories
    Init(InitArgs),
    /// Generate shell completion script
    Completion(CompletionArgs),
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Help(_) => "help",
            Commands::Archive(_) => "archive",
            Commands::Copy(_) => "copy",
            Commands::Dump(_) => "dump",
            Commands::Go(_) => "go",
            Commands::List(_) => "list",
            Commands::Restore(_) => "restore",
            Commands::Start(_) => "start",
            Commands::Todo(_) => "todo",
            Commands::Init(_) => "init",
            Commands::Completion(_) => "completion",
        }
    }
}

/// Long and short spellings of every command.
pub const COMMAND_NAMES: &[(&str, &str)] = &[
    ("archive", "ar"),
    ("copy", "cp"),
    ("dump", "d"),
    ("go", "g"),
    ("help", "h"),
    ("list", "ls"),
    ("restore", "r"),
    ("start", "s"),
    ("todo", "t"),
];

/// Maps a long or short command spelling to its long form.
pub fn canonical_command(token: &str) -> Option<&'static str> {
    match token {
        "init" => return Some("init"),
        "completion" => return Some("completion"),
        _ => {}
    }

    COMMAND_NAMES
        .iter()
        .find(|(long, short)| *long == token || *short == token)
        .map(|(long, _)| *long)
}

#[derive(Args, Debug)]
pub struct HelpArgs {
    /// Command to describe
    pub topics: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ArchiveArgs {
    /// Project to archive
    pub project: Option<String>,
}

#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Project to copy
    pub existing: Option<String>,

    /// Name of the copy
    pub new: Option<String>,
}

#[derive(Args, Debug)]
pub struct DumpArgs {}

#[derive(Args, Debug)]
pub struct GoArgs {
    /// Project name
    pub project: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Show stored metadata under each project
    #[arg(long, short = 'v', help = "Show stored metadata under each project")]
    pub verbose: bool,
}

#[derive(Args, Debug)]
pub struct RestoreArgs {
    /// Dump file to restore from
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[command(after_help = "EXAMPLES:
    # Create ~/projects/my_app and register it as \"My App\"
    proj start \"My App\"

    # Register an explicit directory and jump into it
    proj start api --at ~/work/api --cd")]
pub struct StartArgs {
    /// Project name
    pub name: Option<String>,

    /// Initializers to run in the new project, comma separated (git, npm, gh)
    #[arg(long, short = 'w', value_name = "LIST")]
    pub with: Option<String>,

    /// Directory to create instead of <default_project_dir>/<slug>
    #[arg(long, short = 'a', value_name = "DIR")]
    pub at: Option<String>,

    /// Change into the project once it is created
    #[arg(long)]
    pub cd: bool,

    /// Script to run inside the project after creation
    #[arg(long, value_name = "FILE")]
    pub then: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TodoArgs {
    /// Mark task number N as done
    #[arg(short = 'x', value_name = "N")]
    pub done: Option<u32>,

    /// Task text to add
    pub task: Vec<String>,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Shell to emit the wrapper for (detected from $SHELL when omitted)
    #[arg(value_enum)]
    pub shell: Option<Shell>,

    /// Append the wrapper to the shell's startup file instead of printing it
    #[arg(long, help = "Append the wrapper to the shell's startup file")]
    pub install: bool,
}

#[derive(Args, Debug)]
pub struct CompletionArgs {
    /// Shell to generate completion for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl HelpArgs {
    /// Returns the long form of the requested command, if any.
    pub fn validate(&self) -> Result<Option<&'static str>> {
        match self.topics.as_slice() {
            [] => Ok(None),
            [topic] => canonical_command(topic)
                .map(Some)
                .ok_or_else(|| ProjError::unknown_command(topic.as_str())),
            _ => Err(ProjError::too_many_arguments("help")),
        }
    }
}

impl GoArgs {
    pub fn validate(&self) -> Result<&str> {
        match self.project.as_slice() {
            [] => Err(ProjError::missing_argument("go", "project name")),
            [name] => Ok(name.as_str()),
            _ => Err(ProjError::too_many_arguments("go")),
        }
    }
}

impl StartArgs {
    pub fn validate(&self) -> Result<&str> {
        let name = self
            .name
            .as_deref()
            .ok_or_else(|| ProjError::missing_argument("start", "project name"))?;
        validate_project_name(name)?;

        if let Some(ref at) = self.at {
            if at.trim().is_empty() || at.contains('\n') {
                return Err(ProjError::invalid_argument("start", format!("--at {:?}", at)));
            }
        }

        Ok(name)
    }
}
