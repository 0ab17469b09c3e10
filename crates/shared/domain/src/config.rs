use crate::constants::{DEFAULT_MOUNT_ID, DEFAULT_TITLE};
use serde::Deserialize;

/// Settings consumed by the bootstrapper and the root component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// `id` of the host element to mount under.
    pub mount_id: String,
    pub strict_mode: StrictModePolicy,
    /// Inject the global stylesheet with the root component.
    pub stylesheet: bool,
    pub title: String,
}

/// When the strict-mode wrapper runs its double-render checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrictModePolicy {
    /// On in debug builds, off in release builds.
    #[default]
    Auto,
    Always,
    Never,
}

impl StrictModePolicy {
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        match self {
            Self::Auto => cfg!(debug_assertions),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_owned(),
            strict_mode: StrictModePolicy::Auto,
            stylesheet: true,
            title: DEFAULT_TITLE.to_owned(),
        }
    }
}
