use crate::cli::parser::{Cli, CompletionArgs, Shell};
use crate::core::Outcome;
use crate::utils::{ProjError, Result};
use clap::CommandFactory;
use clap_complete::{generate, shells};

pub fn generate_completion(shell: Shell, bin_name: &str) -> Result<String> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();

    match shell {
        Shell::Bash => generate(shells::Bash, &mut cmd, bin_name, &mut buf),
        Shell::Zsh => generate(shells::Zsh, &mut cmd, bin_name, &mut buf),
        Shell::Fish => generate(shells::Fish, &mut cmd, bin_name, &mut buf),
    }

    String::from_utf8(buf).map_err(|e| {
        ProjError::config_error(format!("UTF-8 error generating completion: {}", e))
    })
}

pub fn execute(args: CompletionArgs, bin_name: &str) -> Result<Outcome> {
    println!("{}", generate_completion(args.shell, bin_name)?);
    Ok(Outcome::Done)
}
