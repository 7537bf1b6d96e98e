//! CLI entry point for todo-mile.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use todo_app::{ProjectConfig, TodoService, resolve_data_dir};
use todo_core::{FilterSelector, Priority};
use todo_store_file::FileStore;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod commands;

/// Local todo list with priorities.
#[derive(Parser, Debug)]
#[command(
    name = "todo",
    version,
    about = "todo-mile: a local todo list with priorities, stored as a single JSON slot"
)]
struct Cli {
    /// Directory holding config.toml and the list slot (defaults to $TODO_MILE_DIR or the platform data dir).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Slot name, overriding `[storage] slot` from the config.
    #[arg(long, global = true)]
    slot: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append a new todo (words are joined with spaces).
    Add {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete the todo at INDEX.
    Rm { index: usize },

    /// Toggle completion of the todo at INDEX.
    Done { index: usize },

    /// Change text and/or priority of the todo at INDEX.
    Edit {
        index: usize,
        #[arg(long)]
        text: Option<String>,
        #[arg(short = 'p', long)]
        priority: Option<Priority>,
    },

    /// List todos with their indices.
    Ls {
        /// all, active or completed (defaults to `[view] default_filter`).
        #[arg(short = 'f', long)]
        filter: Option<FilterSelector>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Show total, active and completed counts.
    Counts {
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Delete every todo in the slot.
    Clear,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let Cli { data_dir, slot, cmd } = Cli::parse();
    install_tracing();

    let data_dir = resolve_data_dir(data_dir);
    execute_command(&data_dir, slot, cmd)
}

fn execute_command(data_dir: &Path, slot: Option<String>, command: Command) -> Result<()> {
    let config = ProjectConfig::from_data_dir(data_dir)?;
    let slot = slot.unwrap_or(config.storage.slot);
    debug!(data_dir = %data_dir.display(), %slot, "Opening slot");

    let store = FileStore::open(data_dir, &slot).with_context(|| format!("cannot open slot '{slot}'"))?;
    let mut service = TodoService::open(store);
    let mut stdout = io::stdout().lock();
    commands::run(command, &mut service, &config.view, &mut stdout)
}

fn install_tracing() {
    // RUST_LOG overrides the default; logs go to stderr so stdout stays parseable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}
