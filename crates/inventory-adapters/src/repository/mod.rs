//! Item repository adapters.

mod memory;
#[cfg(feature = "mongo")]
mod mongo;
mod settings;

pub use memory::InMemoryItemRepository;
#[cfg(feature = "mongo")]
pub use mongo::MongoItemRepository;
pub use settings::MongoSettings;
