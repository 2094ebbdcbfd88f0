use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ng-cleaner")]
#[command(author, version)]
#[command(about = "Reorder imports and clean constructors in TypeScript sources.")]
pub(crate) struct Cli {
    /// Override config directory (user settings live in `<DIR>/ng-cleaner/settings.yaml`).
    #[arg(long, global = true)]
    pub(crate) conf: Option<PathBuf>,

    /// Debug logging for every crate (ignored when RUST_LOG is set).
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Sort, align and group the leading import block.
    Imports(EditArgs),
    /// Regenerate the first constructor with promoted parameter assignments.
    Constructor(EditArgs),
    /// Component cleanup (not implemented; never edits).
    Component(EditArgs),
    /// List registered command ids.
    Commands,
}

#[derive(Args)]
pub(crate) struct EditArgs {
    /// Source file to clean.
    pub(crate) file: PathBuf,

    /// Write the result back instead of printing a diff.
    #[arg(long)]
    pub(crate) write: bool,

    /// Print a JSON report.
    #[arg(long)]
    pub(crate) json: bool,
}
