//! ng-cleaner CLI: run the import, constructor and component cleaners on a file.
//!
//! Settings come from `.ng-cleaner.yaml` in the project root and
//! `ng-cleaner/settings.yaml` under the config home (`--conf <DIR>` overrides).
//!
//! Logging: set `RUST_LOG=ng_cleaner=debug` (or `warn`) to control logs on stderr.

mod cli;
mod nodes;
mod settings;

use std::process::ExitCode;

use clap::Parser;
use cleaner_host::{COMPONENT_CLEANER, CONSTRUCTOR_CLEANER, IMPORT_CLEANER};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::nodes::{build_registry, run_clean_command, run_list_commands};
use crate::settings::load_settings;

const DEFAULT_LOG_FILTER: &str =
    "ng_cleaner=info,cleaner_host=info,cleaner_edit=info,cleaner_io=info";

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG overrides; --verbose => debug everywhere; else info for our crates
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "debug"
        } else {
            DEFAULT_LOG_FILTER
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let settings = load_settings(cli.conf.as_deref());
    let registry = build_registry(&settings)?;

    match cli.command {
        Command::Imports(args) => run_clean_command(&registry, IMPORT_CLEANER, &args, &settings),
        Command::Constructor(args) => {
            run_clean_command(&registry, CONSTRUCTOR_CLEANER, &args, &settings)
        }
        Command::Component(args) => {
            run_clean_command(&registry, COMPONENT_CLEANER, &args, &settings)
        }
        Command::Commands => Ok(run_list_commands(&registry)),
    }
}
