//! Inventory Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the inventory
//! manager, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │     inventory-cli (terminal front-end)  │
//! │   (TerminalView, shell, subcommands)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ItemController)             │
//! │   one record per identifier, notifies   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (ItemRepository, InventoryView)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   inventory-adapters (Infrastructure)   │
//! │ (InMemoryItemRepository, MongoItemRepo) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │          (Item, ItemId, ItemForm)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use inventory_core::{
//!     application::ItemController,
//!     domain::{Item, ItemId},
//! };
//!
//! // `repository` implements `ItemRepository`, `view` implements `InventoryView`.
//! let controller = ItemController::new(repository, view);
//! controller.add(&Item::new("1", "Laptop", 10, 999.9, "Simple Laptop"))?;
//! controller.list()?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ItemController,
        ports::{InventoryView, ItemRepository},
    };
    pub use crate::domain::{Item, ItemForm, ItemId};
    pub use crate::error::{InventoryError, InventoryResult};
}
