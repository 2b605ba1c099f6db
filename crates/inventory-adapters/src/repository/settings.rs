//! Connection settings for the document store.

use serde::{Deserialize, Serialize};

/// Where the item collection lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MongoSettings {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub collection: String,
    /// How long an operation waits for a reachable server before failing.
    pub server_selection_timeout_ms: u64,
}

impl MongoSettings {
    pub const DEFAULT_HOST: &'static str = "localhost";
    pub const DEFAULT_PORT: u16 = 27017;
    pub const DEFAULT_DATABASE: &'static str = "inventory";
    pub const DEFAULT_COLLECTION: &'static str = "item";
    pub const DEFAULT_SERVER_SELECTION_TIMEOUT_MS: u64 = 5_000;

    /// `host:port`, as shown in connection errors.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Connection string understood by the driver.
    pub fn uri(&self) -> String {
        format!(
            "mongodb://{}/?serverSelectionTimeoutMS={}",
            self.address(),
            self.server_selection_timeout_ms
        )
    }
}

impl Default for MongoSettings {
    fn default() -> Self {
        Self {
            host: Self::DEFAULT_HOST.into(),
            port: Self::DEFAULT_PORT,
            database: Self::DEFAULT_DATABASE.into(),
            collection: Self::DEFAULT_COLLECTION.into(),
            server_selection_timeout_ms: Self::DEFAULT_SERVER_SELECTION_TIMEOUT_MS,
        }
    }
}
