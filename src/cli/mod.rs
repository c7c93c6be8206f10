//! CLI command handlers for keymapc.

pub mod common;
pub mod generate;
pub mod leds;
pub mod list;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use generate::{GenerateArgs, OutputFormat};
pub use leds::LedsArgs;
pub use list::ListArgs;
