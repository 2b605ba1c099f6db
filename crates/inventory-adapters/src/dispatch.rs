//! Background execution of controller operations.
//!
//! Front-ends must not block their input loop on storage round-trips, so
//! every user action becomes an [`InventoryCommand`] handed to a single
//! worker thread. The controller stays synchronous; the [`Ticket`] returned
//! by [`Dispatcher::submit`] lets the caller wait for the outcome when it
//! needs to.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use inventory_core::{
    application::ItemController,
    domain::Item,
    error::{InventoryError, InventoryResult},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, warn};

/// One user action for the worker to run.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryCommand {
    List,
    Add(Item),
    Update(Item),
    Delete(Item),
}

impl InventoryCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Add(_) => "add",
            Self::Update(_) => "update",
            Self::Delete(_) => "delete",
        }
    }
}

/// What to do when the start-up listing fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadErrorPolicy {
    /// Report the failure as an error event.
    #[default]
    Log,
    /// Drop the failure without a trace.
    Silent,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("the dispatcher is no longer accepting commands")]
    WorkerStopped,

    #[error("failed to start the dispatcher thread: {reason}")]
    Spawn { reason: String },
}

impl From<DispatchError> for InventoryError {
    fn from(error: DispatchError) -> Self {
        InventoryError::Internal {
            message: error.to_string(),
        }
    }
}

/// Handle on the outcome of one submitted command.
#[derive(Debug)]
#[must_use = "a ticket does nothing unless waited on or dropped deliberately"]
pub struct Ticket {
    reply: Receiver<InventoryResult<()>>,
}

impl Ticket {
    /// Block until the command has run.
    ///
    /// A worker that stops before answering yields
    /// [`DispatchError::WorkerStopped`].
    pub fn wait(self) -> InventoryResult<()> {
        self.reply
            .recv()
            .unwrap_or_else(|_| Err(DispatchError::WorkerStopped.into()))
    }

    fn resolved(result: InventoryResult<()>) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(result);
        Self { reply: rx }
    }
}

enum Failure {
    Propagate,
    Swallow(LoadErrorPolicy),
}

struct Job {
    command: InventoryCommand,
    failure: Failure,
    reply: Sender<InventoryResult<()>>,
}

/// Single worker thread executing commands in submission order.
pub struct Dispatcher {
    queue: Option<Sender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl Dispatcher {
    pub fn new(controller: Arc<ItemController>) -> InventoryResult<Self> {
        let (queue, jobs) = mpsc::channel::<Job>();

        let worker = thread::Builder::new()
            .name("inventory-dispatch".into())
            .spawn(move || run_worker(&controller, jobs))
            .map_err(|e| DispatchError::Spawn {
                reason: e.to_string(),
            })?;

        Ok(Self {
            queue: Some(queue),
            worker: Some(worker),
        })
    }

    /// Queue `command` behind everything submitted before it.
    pub fn submit(&self, command: InventoryCommand) -> Ticket {
        self.enqueue(command, Failure::Propagate)
    }

    /// Queue the start-up listing.
    ///
    /// The returned ticket always resolves to `Ok(())`; a failing listing is
    /// handled according to `policy`.
    pub fn load_initial_items(&self, policy: LoadErrorPolicy) -> Ticket {
        self.enqueue(InventoryCommand::List, Failure::Swallow(policy))
    }

    /// Stop accepting commands, finish the queued ones and join the worker.
    pub fn shutdown(&mut self) {
        drop(self.queue.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("dispatcher worker panicked");
            }
        }
    }

    fn enqueue(&self, command: InventoryCommand, failure: Failure) -> Ticket {
        let Some(queue) = &self.queue else {
            return Ticket::resolved(Err(DispatchError::WorkerStopped.into()));
        };

        let (reply, ticket) = mpsc::channel();
        let job = Job {
            command,
            failure,
            reply,
        };
        match queue.send(job) {
            Ok(()) => Ticket { reply: ticket },
            Err(_) => Ticket::resolved(Err(DispatchError::WorkerStopped.into())),
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("running", &self.queue.is_some())
            .finish()
    }
}

fn run_worker(controller: &ItemController, jobs: Receiver<Job>) {
    for job in jobs {
        debug!(command = job.command.name(), "dispatching");
        let result = execute(controller, &job.command);

        let result = match (result, job.failure) {
            (Err(e), Failure::Swallow(LoadErrorPolicy::Log)) => {
                error!(error = %e, "failed to load items");
                Ok(())
            }
            (Err(_), Failure::Swallow(LoadErrorPolicy::Silent)) => Ok(()),
            (result, _) => result,
        };

        // The caller may have dropped its ticket.
        let _ = job.reply.send(result);
    }
    debug!("dispatcher queue closed");
}

fn execute(controller: &ItemController, command: &InventoryCommand) -> InventoryResult<()> {
    match command {
        InventoryCommand::List => controller.list(),
        InventoryCommand::Add(item) => controller.add(item),
        InventoryCommand::Update(item) => controller.update(item),
        InventoryCommand::Delete(item) => controller.delete(item),
    }
}

#[cfg(test)]
mod tests {
    use inventory_core::{
        application::{ApplicationError, ports::ItemRepository},
        domain::ItemId,
    };

    use super::*;
    use crate::{InMemoryItemRepository, RecordingView, ViewEvent};

    struct OfflineRepository;

    impl OfflineRepository {
        fn offline<T>() -> InventoryResult<T> {
            Err(ApplicationError::Connection {
                address: "localhost:27017".into(),
                reason: "connection refused".into(),
            }
            .into())
        }
    }

    impl ItemRepository for OfflineRepository {
        fn find_all(&self) -> InventoryResult<Vec<Item>> {
            Self::offline()
        }
        fn find_by_id(&self, _id: &ItemId) -> InventoryResult<Option<Item>> {
            Self::offline()
        }
        fn save(&self, _item: &Item) -> InventoryResult<()> {
            Self::offline()
        }
        fn update(&self, _item: &Item) -> InventoryResult<()> {
            Self::offline()
        }
        fn delete(&self, _id: &ItemId) -> InventoryResult<()> {
            Self::offline()
        }
    }

    fn laptop() -> Item {
        Item::new("1", "Laptop", 10, 999.9, "Simple Laptop")
    }

    fn dispatcher_with(repository: impl ItemRepository + 'static) -> (Dispatcher, RecordingView) {
        let view = RecordingView::new();
        let controller = ItemController::new(Box::new(repository), Box::new(view.clone()));
        let dispatcher = Dispatcher::new(Arc::new(controller)).unwrap();
        (dispatcher, view)
    }

    #[test]
    fn commands_run_in_submission_order() {
        let (dispatcher, view) = dispatcher_with(InMemoryItemRepository::new());

        let add = dispatcher.submit(InventoryCommand::Add(laptop()));
        let list = dispatcher.submit(InventoryCommand::List);
        add.wait().unwrap();
        list.wait().unwrap();

        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Added(laptop()),
                ViewEvent::Displayed(vec![laptop()]),
            ]
        );
    }

    #[test]
    fn submitted_failures_reach_the_ticket() {
        let (dispatcher, view) = dispatcher_with(OfflineRepository);

        let err = dispatcher
            .submit(InventoryCommand::Add(laptop()))
            .wait()
            .unwrap_err();

        assert!(matches!(
            err,
            InventoryError::Application(ApplicationError::Connection { .. })
        ));
        assert!(view.events().is_empty());
    }

    #[test]
    fn initial_load_failure_resolves_ok_under_either_policy() {
        let (dispatcher, view) = dispatcher_with(OfflineRepository);

        dispatcher
            .load_initial_items(LoadErrorPolicy::Log)
            .wait()
            .unwrap();
        dispatcher
            .load_initial_items(LoadErrorPolicy::Silent)
            .wait()
            .unwrap();
        assert!(view.events().is_empty());
    }

    #[test]
    fn initial_load_displays_stored_items() {
        let (dispatcher, view) = dispatcher_with(InMemoryItemRepository::with_items([laptop()]));

        dispatcher
            .load_initial_items(LoadErrorPolicy::default())
            .wait()
            .unwrap();
        assert_eq!(view.events(), vec![ViewEvent::Displayed(vec![laptop()])]);
    }

    #[test]
    fn submit_after_shutdown_reports_stopped_worker() {
        let (mut dispatcher, _view) = dispatcher_with(InMemoryItemRepository::new());
        dispatcher.shutdown();

        let err = dispatcher.submit(InventoryCommand::List).wait().unwrap_err();
        assert_eq!(err, InventoryError::from(DispatchError::WorkerStopped));
    }

    #[test]
    fn shutdown_drains_queued_commands() {
        let repository = InMemoryItemRepository::new();
        let (mut dispatcher, _view) = dispatcher_with(repository.clone());

        let ticket = dispatcher.submit(InventoryCommand::Add(laptop()));
        dispatcher.shutdown();

        ticket.wait().unwrap();
        assert_eq!(repository.len(), 1);
    }

    #[test]
    fn load_error_policy_reads_lowercase() {
        let policy: LoadErrorPolicy = serde_json::from_str("\"silent\"").unwrap();
        assert_eq!(policy, LoadErrorPolicy::Silent);
    }
}
