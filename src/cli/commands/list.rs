use crate::cli::parser::ListArgs;
use crate::core::registry::ProjectRecord;
use crate::core::{Context, Outcome};
use crate::utils::Result;

pub fn execute(ctx: &Context, args: ListArgs) -> Result<Outcome> {
    let records = ctx.registry.load()?;

    if records.is_empty() {
        let printer = ctx.printer();
        printer.info("No projects yet.");
        printer.info(format!(
            "Run `{} start <name>` to create one.",
            ctx.bin_name()
        ));
        return Ok(Outcome::Done);
    }

    print!("{}", format_records(&records, args.verbose));
    Ok(Outcome::Done)
}

/// Each project as `"<name>" at <directory>:` followed by its metadata when
/// verbose, or a single blank line otherwise.
pub fn format_records(records: &[ProjectRecord], verbose: bool) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!("\"{}\" at {}:\n", record.name, record.directory));
        if verbose && !record.metadata.is_empty() {
            for line in &record.metadata {
                out.push_str(&format!("    {}\n", line));
            }
        } else {
            out.push('\n');
        }
    }
    out
}
