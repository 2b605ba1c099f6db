//! Global arguments that apply to every subcommand.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, the
//! store selection etc. are available on any invocation without repetition.

use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::StoreBackend;

/// Global arguments for all commands.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Warnings and errors
    -v      - Info level (operations performed)
    -vv     - Debug level (storage round-trips)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Machine-readable output format.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,

    // ── Storage overrides ──────────────────────────────────────────────────
    /// Which store to talk to.
    #[arg(
        long = "store",
        global = true,
        value_enum,
        value_name = "BACKEND",
        help = "Item store (overrides storage.backend)"
    )]
    pub store: Option<StoreBackend>,

    #[arg(
        long = "mongo-host",
        global = true,
        value_name = "HOST",
        help = "MongoDB host (overrides database.host)"
    )]
    pub mongo_host: Option<String>,

    #[arg(
        long = "mongo-port",
        global = true,
        value_name = "PORT",
        help = "MongoDB port (overrides database.port)"
    )]
    pub mongo_port: Option<u16>,

    #[arg(
        long = "db-name",
        global = true,
        value_name = "NAME",
        help = "Database name (overrides database.name)"
    )]
    pub db_name: Option<String>,

    #[arg(
        long = "db-collection",
        global = true,
        value_name = "NAME",
        help = "Collection name (overrides database.collection)"
    )]
    pub db_collection: Option<String>,
}

/// How the CLI should render its output.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Human-readable table with colors.
    Human,
    /// One record per line, no colors.
    Plain,
    /// JSON output.
    Json,
}
