pub mod cli;
pub mod config;
pub mod core;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::RunControl;
pub use crate::core::registry::{ProjectRecord, RegistryManager};
pub use crate::core::{Context, Invocation, Outcome};
pub use utils::{ProjError, Result};
