//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `inventory-adapters` and the
//! terminal front-end in `inventory-cli` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ItemRepository`: item storage keyed by identifier
//!   - `InventoryView`: display of items and error messages
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `ItemController` methods, invoked by front-end events

pub mod output;

pub use output::{InventoryView, ItemRepository};

#[cfg(test)]
pub use output::{MockInventoryView, MockItemRepository};
