pub mod item;

pub use crate::domain::DomainError;
pub use item::Item;
