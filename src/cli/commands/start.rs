use crate::cli::parser::StartArgs;
use crate::core::registry::record::{COMMAND_KEY, CREATED_KEY};
use crate::core::registry::ProjectRecord;
use crate::core::{Context, Outcome};
use crate::utils::{debug_log, slugify, ProjError, Result};
use std::fs;

pub fn execute(ctx: &Context, args: StartArgs) -> Result<Outcome> {
    let name = args.validate()?;

    if let Some(existing) = ctx.registry.find(name)? {
        return Err(ProjError::duplicate_project(
            existing.name,
            existing.directory,
        ));
    }

    if args.with.is_some() {
        return Err(ProjError::not_implemented("start", "start --with"));
    }
    if args.then.is_some() {
        return Err(ProjError::not_implemented("start", "start --then"));
    }

    let target = match args.at.as_deref() {
        Some(at) => ctx.expander.expand(at)?,
        None => {
            let slug = slugify(name)?;
            if slug.is_empty() {
                return Err(ProjError::invalid_argument(
                    "start",
                    format!("{} (no directory name can be derived from it; pass --at)", name),
                ));
            }
            ctx.run_control.default_project_dir().join(slug)
        }
    };

    let stored = target.to_string_lossy().into_owned();
    if stored.contains(['\n', '\r']) {
        return Err(ProjError::invalid_argument(
            "start",
            format!("{:?} (directory names cannot contain line breaks)", stored),
        ));
    }

    debug_log(&format!("Creating {} for project {}", target.display(), name));
    fs::create_dir_all(&target)?;
    let directory = ctx.expander.resolve(&stored)?;

    let record = ProjectRecord::new(name, stored)
        .with_metadata(COMMAND_KEY, &ctx.invocation.command_line)
        .with_metadata(CREATED_KEY, chrono::Local::now().to_rfc3339());
    ctx.registry.append(&record)?;

    ctx.printer().success(format!(
        "Started project \"{}\" at {}",
        record.name, record.directory
    ));

    if args.cd {
        Ok(Outcome::ChangeDirectory(directory))
    } else {
        Ok(Outcome::Done)
    }
}
