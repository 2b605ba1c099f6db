//! Presentation adapter that records every notification.

use std::sync::{Arc, Mutex, PoisonError};

use inventory_core::{application::ports::InventoryView, domain::Item};

/// One notification received from the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    Displayed(Vec<Item>),
    Added(Item),
    Updated(Item),
    Deleted(Item),
    Error { message: String, item: Item },
}

/// View that keeps an ordered log of notifications.
///
/// Clones share the log. Used for headless runs and integration tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, oldest first.
    pub fn events(&self) -> Vec<ViewEvent> {
        self.log().clone()
    }

    /// Drain the log.
    pub fn take_events(&self) -> Vec<ViewEvent> {
        std::mem::take(&mut *self.log())
    }

    /// The most recent notification, if any.
    pub fn last_event(&self) -> Option<ViewEvent> {
        self.log().last().cloned()
    }

    /// Recorded error messages with the item each one referenced.
    pub fn errors(&self) -> Vec<(String, Item)> {
        self.log()
            .iter()
            .filter_map(|event| match event {
                ViewEvent::Error { message, item } => Some((message.clone(), item.clone())),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: ViewEvent) {
        self.log().push(event);
    }

    // A panic while pushing leaves the Vec intact, so poisoning is ignored.
    fn log(&self) -> std::sync::MutexGuard<'_, Vec<ViewEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl InventoryView for RecordingView {
    fn display_items(&self, items: Vec<Item>) {
        self.record(ViewEvent::Displayed(items));
    }

    fn add_item(&self, item: &Item) {
        self.record(ViewEvent::Added(item.clone()));
    }

    fn update_item(&self, item: &Item) {
        self.record(ViewEvent::Updated(item.clone()));
    }

    fn delete_item(&self, item: &Item) {
        self.record(ViewEvent::Deleted(item.clone()));
    }

    fn show_error_message(&self, message: &str, item: &Item) {
        self.record(ViewEvent::Error {
            message: message.to_string(),
            item: item.clone(),
        });
    }
}
