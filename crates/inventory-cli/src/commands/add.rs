//! Implementation of the `inventory add` command.

use tracing::{info, instrument};

use crate::{
    cli::ItemArgs, commands::Session, config::AppConfig, error::CliResult,
    output::OutputManager, view::ViewMode,
};

/// Store a new item.
///
/// Form errors stop here; a taken identifier comes back from the view as
/// [`crate::error::CliError::Rejected`].
#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(args: ItemArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let item = args.into_form().parse().map_err(|e| {
        info!(error = %e, "Form rejected");
        inventory_core::error::InventoryError::from(e)
    })?;

    let session = Session::open(&config, output, ViewMode::OneShot)?;
    session.controller.add(&item)?;
    session.finish()
}
