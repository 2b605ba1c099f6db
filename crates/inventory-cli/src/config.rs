//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags ([`AppConfig::apply_overrides`])
//! 2. Environment variables (`INVENTORY_DATABASE__HOST`, ...)
//! 3. Config file (`--config`, else the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use inventory_adapters::{LoadErrorPolicy, MongoSettings};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::global::{GlobalArgs, OutputFormat};

const ENV_PREFIX: &str = "INVENTORY";
const LOCAL_CONFIG_FILE: &str = ".inventory.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// MongoDB connection.
    pub database: DatabaseConfig,
    /// Which store backs the commands.
    pub storage: StorageConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Interactive session start-up.
    pub startup: StartupConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub collection: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: MongoSettings::DEFAULT_HOST.into(),
            port: MongoSettings::DEFAULT_PORT,
            name: MongoSettings::DEFAULT_DATABASE.into(),
            collection: MongoSettings::DEFAULT_COLLECTION.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StoreBackend,
}

/// Where items live.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// MongoDB collection described by `[database]`.
    #[default]
    Mongo,
    /// Process-local store, empty at start.
    Memory,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Do not list the store when the shell opens.
    pub skip_initial_load: bool,
    /// How a failed start-up listing is reported.
    pub load_errors: LoadErrorPolicy,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let loaded = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from(path).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        loaded
            .try_deserialize()
            .context("configuration has invalid values")
    }

    /// Fold CLI overrides into the loaded values.
    pub fn apply_overrides(&mut self, args: &GlobalArgs) {
        if let Some(store) = args.store {
            self.storage.backend = store;
        }
        if let Some(host) = &args.mongo_host {
            self.database.host = host.clone();
        }
        if let Some(port) = args.mongo_port {
            self.database.port = port;
        }
        if let Some(name) = &args.db_name {
            self.database.name = name.clone();
        }
        if let Some(collection) = &args.db_collection {
            self.database.collection = collection.clone();
        }
        if args.no_color {
            self.output.no_color = true;
        }
    }

    pub fn mongo_settings(&self) -> MongoSettings {
        MongoSettings {
            host: self.database.host.clone(),
            port: self.database.port,
            database: self.database.name.clone(),
            collection: self.database.collection.clone(),
            ..MongoSettings::default()
        }
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.inventory.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("org", "inventory", "inventory")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}
