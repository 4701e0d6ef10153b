use crate::cli::parser::Cli;
use crate::utils::UsageTopic;
use clap::CommandFactory;

fn root_command(bin_name: &str) -> clap::Command {
    let mut cmd = Cli::command().bin_name(bin_name);
    cmd.build();
    cmd
}

/// Full help for the tool itself.
pub fn top_level(bin_name: &str) -> String {
    root_command(bin_name).render_long_help().to_string()
}

/// Full help for one command, looked up by long or short name.
pub fn command(bin_name: &str, name: &str) -> Option<String> {
    let mut root = root_command(bin_name);
    root.find_subcommand_mut(name)
        .map(|sub| sub.render_long_help().to_string())
}

/// The one-line usage summary of a command.
pub fn synopsis(bin_name: &str, name: &str) -> Option<String> {
    let mut root = root_command(bin_name);
    root.find_subcommand_mut(name)
        .map(|sub| sub.render_usage().to_string())
}

pub fn for_topic(bin_name: &str, topic: &UsageTopic) -> String {
    match topic {
        UsageTopic::TopLevel => top_level(bin_name),
        UsageTopic::Command(name) => {
            command(bin_name, name).unwrap_or_else(|| top_level(bin_name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_uses_bin_name_and_lists_commands() {
        let text = top_level("pj");
        assert!(text.contains("Usage: pj"), "{}", text);
        for name in ["archive", "copy", "dump", "go", "list", "restore", "start", "todo"] {
            assert!(text.contains(name), "missing {} in:\n{}", name, text);
        }
    }

    #[test]
    fn test_command_help_by_short_name() {
        let long = command("proj", "start").unwrap();
        let short = command("proj", "s").unwrap();
        assert_eq!(long, short);
        assert!(long.contains("--at"));
        assert!(long.contains("--cd"));
        assert!(long.contains("--then"));
        assert!(long.contains("--with"));
    }

    #[test]
    fn test_unknown_command_has_no_help() {
        assert!(command("proj", "frobnicate").is_none());
        assert!(synopsis("proj", "frobnicate").is_none());
    }

    #[test]
    fn test_synopsis_mentions_command_path() {
        let text = synopsis("proj", "go").unwrap();
        assert!(text.contains("proj go"), "{}", text);
    }

    #[test]
    fn test_for_topic_falls_back_to_top_level() {
        let text = for_topic("proj", &UsageTopic::Command("nope".to_string()));
        assert_eq!(text, top_level("proj"));
    }
}
