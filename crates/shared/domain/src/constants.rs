/// Identifier of the host element the UI tree is mounted under.
pub const DEFAULT_MOUNT_ID: &str = "root";

/// Document title used when none is configured.
pub const DEFAULT_TITLE: &str = "Doran MVP";

/// Prefix for environment overrides (`DORAN__MOUNT_ID=app`).
pub const ENV_PREFIX: &str = "DORAN";

/// Base name of the optional configuration file, without extension.
pub const CONFIG_FILE: &str = "doran";
