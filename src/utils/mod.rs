pub mod error;
pub mod names;
pub mod output;
pub mod path;

pub use error::{ProjError, Result, UsageTopic};
pub use names::{slugify, validate_project_name};
pub use output::Printer;
pub use path::{debug_log, PathExpander};
