//! CLI command handlers, one file per command.

mod batch;
mod check;
mod features;
mod validate_config;

pub use batch::run_batch;
pub use check::run_check;
pub use features::run_features;
pub use validate_config::run_validate_config;
