//! Infrastructure adapters for the inventory manager.
//!
//! This crate implements the ports defined in
//! `inventory-core::application::ports`. It contains all external
//! dependencies and I/O operations, plus the dispatcher that moves controller
//! calls off an interactive front-end's thread.

pub mod dispatch;
pub mod repository;
pub mod view;

// Re-export commonly used adapters
pub use dispatch::{DispatchError, Dispatcher, InventoryCommand, LoadErrorPolicy, Ticket};
pub use repository::InMemoryItemRepository;
pub use repository::MongoSettings;
#[cfg(feature = "mongo")]
pub use repository::MongoItemRepository;
pub use view::{RecordingView, ViewEvent};
