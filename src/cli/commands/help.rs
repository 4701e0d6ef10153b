use crate::cli::parser::HelpArgs;
use crate::cli::usage;
use crate::core::Outcome;
use crate::utils::{ProjError, Result};

pub fn execute(args: HelpArgs, bin_name: &str) -> Result<Outcome> {
    let text = match args.validate()? {
        None => usage::top_level(bin_name),
        Some(command) => usage::command(bin_name, command)
            .ok_or_else(|| ProjError::unknown_command(command))?,
    };

    print!("{}", text);
    if !text.ends_with('\n') {
        println!();
    }
    Ok(Outcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn help_args(topics: &[&str]) -> HelpArgs {
        HelpArgs {
            topics: topics.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_help_known_topics() {
        assert_eq!(execute(help_args(&[]), "proj").unwrap(), Outcome::Done);
        assert_eq!(execute(help_args(&["go"]), "proj").unwrap(), Outcome::Done);
        assert_eq!(execute(help_args(&["ls"]), "proj").unwrap(), Outcome::Done);
    }

    #[test]
    fn test_help_unknown_topic() {
        assert!(matches!(
            execute(help_args(&["frob"]), "proj"),
            Err(ProjError::UnknownCommand { .. })
        ));
    }

    #[test]
    fn test_help_too_many_topics() {
        assert!(matches!(
            execute(help_args(&["go", "list"]), "proj"),
            Err(ProjError::TooManyArguments { .. })
        ));
    }
}
