pub mod context;
pub mod outcome;
pub mod registry;

pub use context::{Context, Invocation};
pub use outcome::Outcome;
