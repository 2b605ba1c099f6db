//! Application layer for the inventory manager.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ItemController)
//! - **Ports**: Interface definitions (traits) for storage and display
//! - **Errors**: Application-specific error types
//!
//! The controller holds no item state of its own; whatever the repository
//! currently stores is the truth.

pub mod error;
pub mod ports;
pub mod services;

pub use services::ItemController;

// Re-export port traits (for adapter implementation)
pub use ports::{InventoryView, ItemRepository};

pub use error::ApplicationError;
