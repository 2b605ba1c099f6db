//! Terminal presentation of the inventory.
//!
//! [`TerminalView`] keeps what a window would keep: the list model, the
//! current selection and one error label. Commands read that state back
//! after the controller returns.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use inventory_core::{
    application::ports::InventoryView,
    domain::{Item, ItemId},
};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::warn;

use crate::{cli::OutputFormat, output::OutputManager};

/// How errors reach the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Error label is left for the command to turn into its exit status.
    OneShot,
    /// Error label is printed as soon as it is set.
    Interactive,
}

#[derive(Debug, Default)]
struct ViewState {
    items: Vec<Item>,
    error_label: Option<String>,
    selected: Option<usize>,
    hide_lists: bool,
}

/// Presentation port for the terminal.
///
/// Clones share state, so a command can keep one while the controller owns
/// another.
#[derive(Debug, Clone)]
pub struct TerminalView {
    state: Arc<Mutex<ViewState>>,
    output: Arc<OutputManager>,
    mode: ViewMode,
}

#[derive(Serialize)]
struct Notice<'a> {
    event: &'a str,
    item: &'a Item,
}

impl TerminalView {
    pub fn new(output: Arc<OutputManager>, mode: ViewMode) -> Self {
        Self {
            state: Arc::default(),
            output,
            mode,
        }
    }

    /// The list model, in display order.
    pub fn items(&self) -> Vec<Item> {
        self.state().items.clone()
    }

    /// Clear the error label, returning what it held.
    pub fn take_error(&self) -> Option<String> {
        self.state().error_label.take()
    }

    /// Select the first listed item with `id`.
    pub fn select(&self, id: &ItemId) -> Option<Item> {
        let mut state = self.state();
        let index = state.items.iter().position(|item| item.id() == id)?;
        state.selected = Some(index);
        state.items.get(index).cloned()
    }

    pub fn selected(&self) -> Option<Item> {
        let state = self.state();
        state.selected.and_then(|index| state.items.get(index).cloned())
    }

    pub fn clear_selection(&self) {
        self.state().selected = None;
    }

    /// Keep the model in sync without printing listings.
    pub fn hide_lists(&self, hide: bool) {
        self.state().hide_lists = hide;
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Rendering ──────────────────────────────────────────────────────────

    fn render_list(&self, items: &[Item]) -> std::io::Result<()> {
        match self.output.format() {
            OutputFormat::Json => self.output.json(items),
            OutputFormat::Plain => {
                for item in items {
                    self.output.print(&item.display_line())?;
                }
                Ok(())
            }
            OutputFormat::Human | OutputFormat::Auto => {
                self.output
                    .header(&format!("Inventory ({} items)", items.len()))?;
                if items.is_empty() {
                    return self.output.print("  (empty)");
                }
                let header = format!(
                    "  {:<10} {:<20} {:>8} {:>12}  {}",
                    "ID", "NAME", "QTY", "PRICE", "DESCRIPTION"
                );
                if self.output.supports_color() {
                    self.output.print(&header.dimmed().to_string())?;
                } else {
                    self.output.print(&header)?;
                }
                for item in items {
                    self.output.print(&table_row(item))?;
                }
                Ok(())
            }
        }
    }

    fn render_change(&self, event: &str, verb: &str, item: &Item) -> std::io::Result<()> {
        if self.output.format() == OutputFormat::Json {
            return self.output.json(&Notice { event, item });
        }
        self.output.success(&format!("{verb}: {}", item.display_line()))
    }

    fn report(&self, result: std::io::Result<()>) {
        if let Err(e) = result {
            warn!(error = %e, "failed to write to terminal");
        }
    }
}

fn table_row(item: &Item) -> String {
    format!(
        "  {:<10} {:<20} {:>8} {:>12?}  {}",
        item.id().as_str(),
        item.name(),
        item.quantity(),
        item.price(),
        item.description()
    )
}

impl InventoryView for TerminalView {
    fn display_items(&self, items: Vec<Item>) {
        let hidden = self.state().hide_lists;
        if !hidden {
            self.report(self.render_list(&items));
        }
        let mut state = self.state();
        state.items = items;
        state.selected = None;
    }

    fn add_item(&self, item: &Item) {
        {
            let mut state = self.state();
            state.items.push(item.clone());
            state.error_label = None;
        }
        self.report(self.render_change("added", "Added", item));
    }

    fn update_item(&self, item: &Item) {
        {
            let mut state = self.state();
            if let Some(slot) = state.items.iter_mut().find(|i| i.id() == item.id()) {
                *slot = item.clone();
            }
            state.error_label = None;
        }
        self.report(self.render_change("updated", "Updated", item));
    }

    fn delete_item(&self, item: &Item) {
        {
            let mut state = self.state();
            if let Some(position) = state.items.iter().position(|i| i == item) {
                state.items.remove(position);
                state.selected = None;
            }
            state.error_label = None;
        }
        self.report(self.render_change("deleted", "Deleted", item));
    }

    fn show_error_message(&self, message: &str, item: &Item) {
        let label = format!("{message}: {}", item.display_line());
        if self.mode == ViewMode::Interactive {
            self.report(self.output.error(&label));
        }
        self.state().error_label = Some(label);
    }
}
