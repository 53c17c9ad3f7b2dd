//! CLI command implementations.

mod process;
mod stages;

pub use process::cmd_process;
pub use stages::cmd_stages;
