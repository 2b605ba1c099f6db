//! Implementation of the `inventory delete` command.
//!
//! Deletion works on a listed record: the store is listed first and the
//! entry with the requested identifier is what the controller receives. An
//! identifier that is not listed is still handed over, as a record carrying
//! only that identifier, so the rejection comes from the controller.

use inventory_core::domain::{Item, ItemId};
use tracing::{debug, instrument};

use crate::{
    cli::DeleteArgs,
    commands::Session,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    view::ViewMode,
};

#[instrument(skip_all, fields(id = %args.id))]
pub fn execute(args: DeleteArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if args.id.trim().is_empty() {
        return Err(CliError::InvalidInput {
            message: "the identifier must not be blank".into(),
            source: None,
        });
    }

    let session = Session::open(&config, output, ViewMode::OneShot)?;

    // The listing only feeds the selection; keep it off the terminal.
    session.view.hide_lists(true);
    session.controller.list()?;
    session.view.hide_lists(false);

    let id = ItemId::from(args.id);
    let target = match session.view.select(&id) {
        Some(item) => item,
        None => {
            debug!("Identifier not listed, passing a bare record");
            Item::new(id, "", 0, 0.0, "")
        }
    };

    session.controller.delete(&target)?;
    session.finish()
}
