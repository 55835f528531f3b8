// spritegen-cli/src/lib.rs
//
// Library portion of the spritegen CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod terminal;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, GenerateArgs, PlanArgs};
pub use commands::generate::run_generate;
pub use commands::plan::run_plan;
