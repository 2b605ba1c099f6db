//! Implementation of the `inventory update` command.

use inventory_core::error::InventoryError;
use tracing::instrument;

use crate::{
    cli::ItemArgs, commands::Session, config::AppConfig, error::CliResult,
    output::OutputManager, view::ViewMode,
};

/// Overwrite the item stored under the given identifier.
#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(args: ItemArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let item = args.into_form().parse().map_err(InventoryError::from)?;

    let session = Session::open(&config, output, ViewMode::OneShot)?;
    session.controller.update(&item)?;
    session.finish()
}
