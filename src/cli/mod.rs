pub mod commands;
pub mod parser;
pub mod usage;


pub use parser::{Cli, Commands};

use crate::cli::parser::canonical_command;
use crate::core::outcome::write_cd_request;
use crate::core::{Context, Invocation, Outcome};
use crate::utils::{debug_log, ProjError, Result, UsageTopic};
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

/// Runs one invocation end to end and returns the process exit code.
///
/// The run-control file is read before the arguments are interpreted, so a
/// bad setting stops every command, `help` included.
pub fn run(args: Vec<String>) -> i32 {
    let invocation = Invocation::from_env(&args);

    let ctx = match Context::load(invocation.clone()) {
        Ok(ctx) => ctx,
        Err(err) => {
            report_error(&err, &invocation);
            return err.exit_code();
        }
    };

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return 0;
        }
        Err(e) => {
            let err = from_clap_error(&e, &args);
            report_error(&err, &invocation);
            return err.exit_code();
        }
    };

    let result = execute_with_context(cli.command, &ctx)
        .and_then(|outcome| deliver_outcome(outcome, &invocation));

    match result {
        Ok(()) => 0,
        Err(err) => {
            report_error(&err, &invocation);
            err.exit_code()
        }
    }
}

pub fn execute_with_context(command: Option<Commands>, ctx: &Context) -> Result<Outcome> {
    debug_log(&format!(
        "Dispatching {}",
        command.as_ref().map(Commands::name).unwrap_or("<none>")
    ));

    match command {
        Some(Commands::Go(args)) => commands::go::execute(ctx, args),
        Some(Commands::List(args)) => commands::list::execute(ctx, args),
        Some(Commands::Start(args)) => commands::start::execute(ctx, args),
        Some(
            command @ (Commands::Archive(_)
            | Commands::Copy(_)
            | Commands::Dump(_)
            | Commands::Restore(_)
            | Commands::Todo(_)),
        ) => commands::placeholder::execute(command.name()),
        Some(Commands::Help(args)) => commands::help::execute(args, ctx.bin_name()),
        Some(Commands::Init(args)) => commands::init::execute(args, ctx.bin_name()),
        Some(Commands::Completion(args)) => {
            commands::completion::execute(args, ctx.bin_name())
        }
        None => commands::here::execute(ctx),
    }
}

/// Carries out a directory change through the shell wrapper's channel file.
/// Without the wrapper the path is printed so it can be used by hand.
pub fn deliver_outcome(outcome: Outcome, invocation: &Invocation) -> Result<()> {
    let target = match outcome {
        Outcome::Done => return Ok(()),
        Outcome::ChangeDirectory(target) => target,
    };

    match &invocation.cd_channel {
        Some(channel) => write_cd_request(channel, &target),
        None => {
            println!("{}", target.display());
            invocation.printer.warn(format!(
                "shell integration is not active, so the directory was not changed; \
                 add `eval \"$(command {bin} init)\"` to your shell startup file",
                bin = invocation.bin_name
            ));
            Ok(())
        }
    }
}

fn report_error(err: &ProjError, invocation: &Invocation) {
    let printer = &invocation.printer;
    let bin_name = &invocation.bin_name;

    if err.is_placeholder() {
        printer.notice(err);
        if let Some(UsageTopic::Command(name)) = err.usage_topic() {
            if let Some(synopsis) = usage::synopsis(bin_name, &name) {
                println!("{}", synopsis);
            }
        }
        return;
    }

    printer.error(err);
    if let Some(topic) = err.usage_topic() {
        eprintln!();
        eprint!("{}", usage::for_topic(bin_name, &topic));
    }
}

/// Folds clap's parse failures into the tool's own error kinds.
pub fn from_clap_error(e: &clap::Error, args: &[String]) -> ProjError {
    let command = args
        .iter()
        .skip(1)
        .find(|arg| !arg.starts_with('-'))
        .and_then(|token| canonical_command(token))
        .unwrap_or("");

    let context = |kind: ContextKind| match e.get(kind) {
        Some(ContextValue::String(value)) => Some(value.clone()),
        _ => None,
    };

    match e.kind() {
        ErrorKind::InvalidSubcommand => {
            ProjError::unknown_command(context(ContextKind::InvalidSubcommand).unwrap_or_default())
        }
        ErrorKind::UnknownArgument => ProjError::invalid_argument(
            command,
            context(ContextKind::InvalidArg).unwrap_or_default(),
        ),
        ErrorKind::MissingRequiredArgument => {
            ProjError::missing_argument(command, "argument")
        }
        ErrorKind::InvalidValue
            if context(ContextKind::InvalidValue).map_or(true, |v| v.is_empty()) =>
        {
            ProjError::missing_argument(
                command,
                format!(
                    "value for {}",
                    context(ContextKind::InvalidArg).unwrap_or_default()
                ),
            )
        }
        _ => {
            let rendered = e.kind().as_str().unwrap_or("invalid input").to_string();
            let token = context(ContextKind::InvalidValue)
                .map(|value| format!("{} ({})", value, rendered))
                .unwrap_or(rendered);
            ProjError::invalid_argument(command, token)
        }
    }
}
