//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};
use inventory_core::domain::ItemForm;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "inventory",
    bin_name = "inventory",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Manage a stock of items kept in MongoDB",
    long_about = "Lists, adds, updates and deletes inventory items. Every change \
                  is checked against the store first: an identifier can only \
                  be added once, and only existing identifiers can be updated \
                  or deleted.",
    after_help = "EXAMPLES:\n\
        \x20 inventory list\n\
        \x20 inventory add --id 1 --name Laptop --quantity 10 --price 999.9 --description \"Simple Laptop\"\n\
        \x20 inventory delete --id 1\n\
        \x20 inventory --store memory shell",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show every stored item.
    #[command(
        visible_alias = "ls",
        about = "List stored items",
        after_help = "EXAMPLES:\n\
            \x20 inventory list\n\
            \x20 inventory list --output-format json"
    )]
    List,

    /// Store a new item.
    #[command(
        about = "Add a new item",
        after_help = "EXAMPLES:\n\
            \x20 inventory add --id 2 --name Mobile --quantity 5 --price 899.9 --description \"Gaming Phone\""
    )]
    Add(ItemArgs),

    /// Overwrite an existing item.
    #[command(
        about = "Update an existing item",
        after_help = "EXAMPLES:\n\
            \x20 inventory update --id 2 --name Mobile --quantity 4 --price 849.9 --description \"Gaming Phone\""
    )]
    Update(ItemArgs),

    /// Remove an item by identifier.
    #[command(visible_alias = "rm", about = "Delete an item")]
    Delete(DeleteArgs),

    /// Interactive session.
    #[command(about = "Start an interactive session")]
    Shell,

    /// Initialise an inventory configuration file.
    #[command(about = "Initialise configuration")]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 inventory completions bash > ~/.local/share/bash-completion/completions/inventory\n\
            \x20 inventory completions zsh  > ~/.zfunc/_inventory\n\
            \x20 inventory completions fish > ~/.config/fish/completions/inventory.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the inventory configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 inventory config get database.host\n\
            \x20 inventory config list\n\
            \x20 inventory config path"
    )]
    Config(ConfigCommands),
}

// ── add / update ──────────────────────────────────────────────────────────────

/// The five item fields, taken verbatim.
///
/// Numbers stay strings here so that bad input is reported by the form
/// parser with the same messages the interactive session shows.
#[derive(Debug, Args)]
pub struct ItemArgs {
    #[arg(long = "id", value_name = "ID", help = "Item identifier")]
    pub id: String,

    #[arg(short = 'n', long = "name", value_name = "NAME", help = "Item name")]
    pub name: String,

    #[arg(
        long = "quantity",
        value_name = "N",
        allow_hyphen_values = true,
        help = "Units in stock"
    )]
    pub quantity: String,

    #[arg(
        long = "price",
        value_name = "PRICE",
        allow_hyphen_values = true,
        help = "Unit price"
    )]
    pub price: String,

    #[arg(
        short = 'd',
        long = "description",
        value_name = "TEXT",
        help = "Free-text description"
    )]
    pub description: String,
}

impl ItemArgs {
    pub fn into_form(self) -> ItemForm {
        ItemForm {
            id: self.id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
            description: self.description,
        }
    }
}

// ── delete ────────────────────────────────────────────────────────────────────

/// Arguments for `inventory delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Identifier of the item to remove.
    #[arg(long = "id", value_name = "ID", help = "Item identifier")]
    pub id: String,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `inventory init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `inventory completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `inventory config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `database.host`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
