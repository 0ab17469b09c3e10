mod error;

pub use error::{ConfigError, ConfigErrorExt};

use ::config::{Case, Config, Environment, File, Map};
use doran_domain::constants::{CONFIG_FILE, ENV_PREFIX};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Layered configuration loader: optional file, then `DORAN__` environment overrides.
///
/// Nested keys use double underscores (`DORAN__MOUNT_ID` maps to `mount_id`).
/// Without an explicit file the loader looks for `doran.{toml,json,yaml}` in the
/// working directory and carries on with defaults when none exists.
///
/// # Example
/// ```rust
/// use doran_domain::config::BootstrapConfig;
/// use doran_kernel::config::ConfigLoader;
///
/// let cfg: BootstrapConfig = ConfigLoader::new().load().unwrap_or_default();
/// assert!(!cfg.mount_id.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct ConfigLoader {
    file: Option<PathBuf>,
    env: Option<Map<String, String>>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads settings from `path`; the file must exist.
    #[must_use]
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replaces the process environment as the override source.
    #[must_use]
    pub fn env_source(mut self, vars: Map<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Builds the layered configuration and deserializes it into `T`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Config`] if an explicit file is missing or malformed,
    /// or the merged values do not fit `T`.
    pub fn load<T>(self) -> Result<T, ConfigError>
    where
        T: DeserializeOwned,
    {
        let file = match &self.file {
            Some(path) => {
                info!("Loading config from {}", path.display());
                File::from(path.as_path()).required(true)
            }
            None => {
                debug!("No config file given, probing '{CONFIG_FILE}'");
                File::with_name(CONFIG_FILE).required(false)
            }
        };

        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .convert_case(Case::Snake)
            .try_parsing(true)
            .source(self.env);

        Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to build config")?
            .try_deserialize::<T>()
            .context("Failed to deserialize config")
    }
}

/// Shorthand for [`ConfigLoader`] with an optional file and the process environment.
///
/// # Errors
/// See [`ConfigLoader::load`].
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let loader = ConfigLoader::new();
    let loader = match path {
        Some(path) => loader.file(path),
        None => loader,
    };
    loader.load()
}
