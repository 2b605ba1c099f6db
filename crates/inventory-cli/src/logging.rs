//! Log output for the `inventory` binary.
//!
//! The library crates only emit events; this module installs the single
//! subscriber. Everything goes to stderr so stdout stays clean for listings
//! and JSON.
//!
//! `-q` keeps errors only, no flag shows warnings, and each `-v` steps up
//! through INFO, DEBUG and TRACE. A set `RUST_LOG` replaces the whole filter.

use std::io::IsTerminal as _;

use tracing_subscriber::{
    EnvFilter, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates that follow the verbosity flags. Dependencies stay at WARN.
const WORKSPACE_TARGETS: [&str; 3] = ["inventory", "inventory_core", "inventory_adapters"];

pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = level_for(args);
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directives(level))?,
    };

    // Shell commands run on the dispatcher thread.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_thread_names(level >= LevelFilter::DEBUG)
        .with_target(level == LevelFilter::TRACE);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {e}"))
}

fn filter_directives(level: LevelFilter) -> String {
    let mut directives = vec![LevelFilter::WARN.to_string()];
    directives.extend(
        WORKSPACE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives.join(",")
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
