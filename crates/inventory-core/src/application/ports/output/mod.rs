//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `inventory-adapters` crate provides implementations.

use crate::domain::{Item, ItemId};
use crate::error::InventoryResult;

/// Port for item storage and retrieval.
///
/// Implemented by:
/// - `inventory_adapters::repository::InMemoryItemRepository` (testing, `--store memory`)
/// - `inventory_adapters::repository::MongoItemRepository` (production)
///
/// ## Storage boundary
///
/// Adapters map an item to whatever representation they use, keyed by the
/// identifier, with the field names `id`, `name`, `quantity`, `price` and
/// `description`. The controller never looks at that mapping.
#[cfg_attr(test, mockall::automock)]
pub trait ItemRepository: Send + Sync {
    /// All stored items, in storage order.
    fn find_all(&self) -> InventoryResult<Vec<Item>>;

    /// The item stored under `id`, if any.
    fn find_by_id(&self, id: &ItemId) -> InventoryResult<Option<Item>>;

    /// Insert a new item.
    fn save(&self, item: &Item) -> InventoryResult<()>;

    /// Overwrite every non-identifier field of the item stored under `item.id()`.
    fn update(&self, item: &Item) -> InventoryResult<()>;

    /// Remove the item stored under `id`.
    fn delete(&self, id: &ItemId) -> InventoryResult<()>;
}

/// Port for presenting items to the user.
///
/// Implemented by:
/// - `inventory_cli::view::TerminalView` (one-shot commands and the shell)
/// - `inventory_adapters::view::RecordingView` (headless, integration tests)
///
/// Notifications are fire-and-forget. Implementations that render to a
/// device handle their own I/O failures.
#[cfg_attr(test, mockall::automock)]
pub trait InventoryView: Send + Sync {
    /// Replace the displayed list with `items`.
    fn display_items(&self, items: Vec<Item>);

    /// A new item was stored.
    fn add_item(&self, item: &Item);

    /// An existing item was overwritten.
    fn update_item(&self, item: &Item);

    /// An item was removed.
    fn delete_item(&self, item: &Item);

    /// A request was rejected; `item` is the record the message is about.
    fn show_error_message(&self, message: &str, item: &Item);
}
