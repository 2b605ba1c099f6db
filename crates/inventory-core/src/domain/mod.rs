//! Core domain layer for the inventory manager.
//!
//! This module contains pure value types with no I/O. Storage and display
//! concerns are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No database, terminal, or network calls
//! - **Replace, don't mutate**: the controller swaps whole `Item` values
pub mod entities;
pub mod error;
pub mod form;
pub mod value_objects;

pub use entities::item::Item;
pub use error::DomainError;
pub use form::ItemForm;
pub use value_objects::ItemId;
