//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! list / add / update / delete use cases.

pub mod item_controller;

pub use item_controller::ItemController;
