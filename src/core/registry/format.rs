//! Text format of the registry file.
//!
//! ```text
//! web:/home/me/projects/web
//!   cmd: proj start web
//!   created: 2026-03-01T10:00:00+01:00
//!
//! notes:/home/me/notes
//! ```
//!
//! A line starting with an ASCII letter or `_` opens a record and is split
//! on its first `:`. Blank lines separate records. Every other line belongs
//! to the most recent record as metadata.

use super::record::ProjectRecord;
use crate::utils::{debug_log, ProjError, Result};

const METADATA_INDENT: &str = "  ";

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Primary(&'a str),
    Metadata(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let line = line.trim_end_matches('\r');
    if line.trim().is_empty() {
        return Line::Blank;
    }

    match line.chars().next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => Line::Primary(line),
        _ => Line::Metadata(line.trim_start()),
    }
}

fn parse_primary(line: &str, line_number: usize) -> Result<ProjectRecord> {
    let (name, directory) = line
        .split_once(':')
        .ok_or_else(|| ProjError::registry_format(line_number, "expected <name>:<directory>"))?;

    if directory.trim().is_empty() {
        return Err(ProjError::registry_format(
            line_number,
            format!("project \"{}\" has no directory", name),
        ));
    }

    Ok(ProjectRecord::new(name, directory))
}

pub fn parse(content: &str) -> Result<Vec<ProjectRecord>> {
    let mut records: Vec<ProjectRecord> = Vec::new();

    for (index, raw) in content.lines().enumerate() {
        let line_number = index + 1;
        match classify(raw) {
            Line::Blank => {}
            Line::Primary(line) => records.push(parse_primary(line, line_number)?),
            Line::Metadata(text) => match records.last_mut() {
                Some(record) => record.metadata.push(text.to_string()),
                None => debug_log(&format!(
                    "Skipping registry line {} with no preceding project",
                    line_number
                )),
            },
        }
    }

    Ok(records)
}

pub fn serialize_record(record: &ProjectRecord) -> String {
    let mut out = format!("{}:{}\n", record.name, record.directory);
    for line in &record.metadata {
        out.push_str(METADATA_INDENT);
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Text to append to `existing` so that `record` becomes its last entry.
pub fn append_block(existing: &str, record: &ProjectRecord) -> String {
    let mut out = String::new();
    if !existing.is_empty() {
        if !existing.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(&serialize_record(record));
    out
}
