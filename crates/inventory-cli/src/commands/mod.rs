//! Command handlers and the wiring they share.

use std::sync::Arc;

use inventory_adapters::InMemoryItemRepository;
use inventory_core::{application::ports::ItemRepository, prelude::ItemController};
use tracing::{debug, instrument};

use crate::{
    config::{AppConfig, StoreBackend},
    error::{CliError, CliResult},
    output::OutputManager,
    view::{TerminalView, ViewMode},
};

pub mod add;
pub mod completions;
pub mod config;
pub mod delete;
pub mod init;
pub mod list;
pub mod shell;
pub mod update;

/// Controller plus a handle on the view it notifies.
pub struct Session {
    pub controller: ItemController,
    pub view: TerminalView,
}

impl Session {
    /// Connect to the configured store and wire a controller to a fresh view.
    pub fn open(config: &AppConfig, output: OutputManager, mode: ViewMode) -> CliResult<Self> {
        Self::open_shared(config, Arc::new(output), mode)
    }

    /// Like [`Session::open`] when the caller keeps printing too.
    pub fn open_shared(
        config: &AppConfig,
        output: Arc<OutputManager>,
        mode: ViewMode,
    ) -> CliResult<Self> {
        let repository = open_repository(config)?;
        let view = TerminalView::new(output, mode);
        let controller = ItemController::new(repository, Box::new(view.clone()));
        Ok(Self { controller, view })
    }

    /// Turn a rejection shown by the view into the command's error.
    pub fn finish(self) -> CliResult<()> {
        match self.view.take_error() {
            Some(message) => Err(CliError::Rejected { message }),
            None => Ok(()),
        }
    }
}

#[instrument(skip_all, fields(backend = ?config.storage.backend))]
fn open_repository(config: &AppConfig) -> CliResult<Box<dyn ItemRepository>> {
    match config.storage.backend {
        StoreBackend::Memory => {
            debug!("Using process-local store");
            Ok(Box::new(InMemoryItemRepository::new()))
        }
        StoreBackend::Mongo => open_mongo(config),
    }
}

#[cfg(feature = "mongo")]
fn open_mongo(config: &AppConfig) -> CliResult<Box<dyn ItemRepository>> {
    let repository = inventory_adapters::MongoItemRepository::connect(&config.mongo_settings())?;
    Ok(Box::new(repository))
}

#[cfg(not(feature = "mongo"))]
fn open_mongo(_config: &AppConfig) -> CliResult<Box<dyn ItemRepository>> {
    Err(CliError::FeatureNotAvailable { feature: "mongo" })
}
