use thiserror::Error;

/// Which usage block should accompany an error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageTopic {
    TopLevel,
    Command(String),
}

#[derive(Error, Debug)]
pub enum ProjError {
    #[error("unknown command: {command}")]
    UnknownCommand { command: String },

    #[error("missing required {what}")]
    MissingArgument { command: String, what: String },

    #[error("extra arguments not supported")]
    TooManyArguments { command: String },

    #[error("invalid argument: {token}")]
    InvalidArgument { command: String, token: String },

    #[error("project already exists: \"{name}\" at {directory}")]
    DuplicateProject { name: String, directory: String },

    #[error("no project named \"{name}\"")]
    ProjectNotFound { name: String },

    #[error("{path}:{line}: {message}")]
    ConfigParse {
        path: String,
        line: usize,
        message: String,
    },

    #[error("{feature} is still in development")]
    NotImplemented { command: String, feature: String },

    #[error("cannot resolve {path}: {message}")]
    PathExpansion { path: String, message: String },

    #[error("malformed registry line {line}: {message}")]
    RegistryFormat { line: usize, message: String },

    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProjError>;

impl ProjError {
    pub fn unknown_command(command: impl Into<String>) -> Self {
        Self::UnknownCommand {
            command: command.into(),
        }
    }

    pub fn missing_argument(command: impl Into<String>, what: impl Into<String>) -> Self {
        Self::MissingArgument {
            command: command.into(),
            what: what.into(),
        }
    }

    pub fn too_many_arguments(command: impl Into<String>) -> Self {
        Self::TooManyArguments {
            command: command.into(),
        }
    }

    pub fn invalid_argument(command: impl Into<String>, token: impl Into<String>) -> Self {
        Self::InvalidArgument {
            command: command.into(),
            token: token.into(),
        }
    }

    pub fn duplicate_project(name: impl Into<String>, directory: impl Into<String>) -> Self {
        Self::DuplicateProject {
            name: name.into(),
            directory: directory.into(),
        }
    }

    pub fn project_not_found(name: impl Into<String>) -> Self {
        Self::ProjectNotFound { name: name.into() }
    }

    pub fn config_parse(path: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    pub fn not_implemented(command: impl Into<String>, feature: impl Into<String>) -> Self {
        Self::NotImplemented {
            command: command.into(),
            feature: feature.into(),
        }
    }

    pub fn path_expansion(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PathExpansion {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn registry_format(line: usize, message: impl Into<String>) -> Self {
        Self::RegistryFormat {
            line,
            message: message.into(),
        }
    }

    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Placeholder commands report through the error path but still succeed.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotImplemented { .. } => 0,
            _ => 1,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }

    pub fn usage_topic(&self) -> Option<UsageTopic> {
        match self {
            Self::UnknownCommand { .. } => Some(UsageTopic::TopLevel),
            Self::MissingArgument { command, .. }
            | Self::TooManyArguments { command }
            | Self::InvalidArgument { command, .. }
            | Self::NotImplemented { command, .. } => Some(if command.is_empty() {
                UsageTopic::TopLevel
            } else {
                UsageTopic::Command(command.clone())
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ProjError::missing_argument("go", "project name").to_string(),
            "missing required project name"
        );
        assert_eq!(
            ProjError::too_many_arguments("go").to_string(),
            "extra arguments not supported"
        );
        assert_eq!(
            ProjError::project_not_found("web").to_string(),
            "no project named \"web\""
        );
        assert_eq!(
            ProjError::duplicate_project("web", "/home/me/projects/web").to_string(),
            "project already exists: \"web\" at /home/me/projects/web"
        );
        assert_eq!(
            ProjError::invalid_argument("start", "--bogus").to_string(),
            "invalid argument: --bogus"
        );
        assert_eq!(
            ProjError::config_parse("/home/me/.prc", 3, "unknown key \"colour\"").to_string(),
            "/home/me/.prc:3: unknown key \"colour\""
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ProjError::not_implemented("dump", "dump").exit_code(), 0);
        assert!(ProjError::not_implemented("dump", "dump").is_placeholder());
        assert_eq!(ProjError::unknown_command("frob").exit_code(), 1);
        assert_eq!(ProjError::project_not_found("x").exit_code(), 1);
    }

    #[test]
    fn test_usage_topics() {
        assert_eq!(
            ProjError::unknown_command("frob").usage_topic(),
            Some(UsageTopic::TopLevel)
        );
        assert_eq!(
            ProjError::invalid_argument("start", "-z").usage_topic(),
            Some(UsageTopic::Command("start".to_string()))
        );
        assert_eq!(
            ProjError::missing_argument("", "subcommand").usage_topic(),
            Some(UsageTopic::TopLevel)
        );
        assert_eq!(ProjError::project_not_found("x").usage_topic(), None);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ProjError = io_err.into();
        assert!(matches!(err, ProjError::Io(_)));
        assert_eq!(err.exit_code(), 1);
    }
}
