//! Runners behind the CLI subcommands.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use cleaner_edit::unified_diff;
use cleaner_host::{CommandRegistry, Document, Extension, MemoryHost};
use cleaner_io::{read_source, write_source_atomic};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::EditArgs;
use crate::settings::Settings;

/// Outcome of running one command against one file.
#[derive(Debug, Serialize)]
pub(crate) struct CleanReport {
    pub(crate) command: String,
    pub(crate) path: String,
    pub(crate) changed: bool,
    pub(crate) written: bool,
    pub(crate) error: Option<String>,
    pub(crate) diff: String,
}

/// Activate every command with styles taken from `settings`.
pub(crate) fn build_registry(settings: &Settings) -> anyhow::Result<CommandRegistry> {
    let extension = Extension::new(settings.import_style(), settings.constructor_style());
    let mut registry = CommandRegistry::new();
    let subscriptions = extension
        .activate(&mut registry)
        .context("failed to activate commands")?;
    debug!(commands = subscriptions.ids().len(), "registry ready");
    Ok(registry)
}

/// Load `path` into a memory host, run `command_id`, and optionally persist.
///
/// A message shown by the command is reported, not returned as an error; the
/// file is never written in that case.
pub(crate) fn clean_file(
    registry: &CommandRegistry,
    command_id: &str,
    path: &Path,
    write: bool,
    max_file_size: u64,
) -> anyhow::Result<CleanReport> {
    let original = read_source(path, max_file_size)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut host = MemoryHost::with_document(Document::new(original.clone()));
    registry
        .execute(command_id, &mut host)
        .with_context(|| format!("{command_id} failed on {}", path.display()))?;

    let error = host.error_messages().first().cloned();
    let cleaned = host
        .document()
        .map_or_else(|| original.clone(), |doc| doc.as_str().to_string());
    let changed = cleaned != original;
    let label = path.display().to_string();
    let diff = unified_diff(&original, &cleaned, &label);

    let written = write && changed;
    if written {
        write_source_atomic(path, &cleaned)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), command = command_id, "wrote cleaned source");
    }

    Ok(CleanReport {
        command: command_id.to_string(),
        path: label,
        changed,
        written,
        error,
        diff,
    })
}

/// Run a cleaning subcommand and print its report.
pub(crate) fn run_clean_command(
    registry: &CommandRegistry,
    command_id: &str,
    args: &EditArgs,
    settings: &Settings,
) -> anyhow::Result<ExitCode> {
    let report = clean_file(
        registry,
        command_id,
        &args.file,
        args.write,
        settings.max_file_size(),
    )?;

    if let Some(error) = &report.error {
        eprintln!("{error}");
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.error.is_none() {
        if report.written {
            println!("Updated {}", report.path);
        } else if !report.changed {
            println!("No changes");
        } else if !args.write {
            print!("{}", report.diff);
        }
    }

    Ok(if report.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// Print every registered command id, one per line.
pub(crate) fn run_list_commands(registry: &CommandRegistry) -> ExitCode {
    for id in registry.command_ids() {
        println!("{id}");
    }
    ExitCode::SUCCESS
}
