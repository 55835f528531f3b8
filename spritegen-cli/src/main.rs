// spritegen-cli/src/main.rs
//
// Entry point for the `spritegen` binary: parses arguments, sets up logging,
// dispatches the subcommand and maps the outcome to an exit status.
//
// Exit status is 0 when every video produced a sprite sheet (or there was
// nothing to do) and 1 when any video failed or the run could not start.

use clap::Parser;
use spritegen_cli::{Cli, Commands, run_generate, run_plan};

use std::process;

fn main() {
    let cli = Cli::parse();

    let console_to_stderr = cli.command.json_output();
    match spritegen_cli::logging::setup_logging(cli.verbose, cli.log_dir.as_deref(), console_to_stderr) {
        Ok(Some(path)) => log::debug!("Writing log file to {}", path.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    let exit_code = match cli.command {
        Commands::Generate(args) => match run_generate(args) {
            Ok(report) if report.has_failures() => 1,
            Ok(_) => 0,
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        },
        Commands::Plan(args) => match run_plan(args) {
            Ok(_) => 0,
            Err(e) => {
                eprintln!("Error: {e}");
                1
            }
        },
    };

    process::exit(exit_code);
}
