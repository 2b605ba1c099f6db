//! Implementation of the `inventory list` command.

use tracing::instrument;

use crate::{
    commands::Session,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    view::ViewMode,
};

/// Show every stored item in storage order.
#[instrument(skip_all)]
pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let session = Session::open(&config, output, ViewMode::OneShot)?;
    session
        .controller
        .list()
        .with_cli_context(|| "listing items")?;
    session.finish()
}
