//! # Logger
//!
//! Installs the global `tracing` subscriber for native Doran binaries.
//!
//! * Console output (stderr) in compact, pretty or JSON form.
//! * Optional rolling log files written through a non-blocking worker.
//! * `RUST_LOG` is honoured; [`LoggerBuilder::env_filter`] sets a programmatic default.
//!
//! Browser builds do not use this crate: the Dioxus logger installs a
//! console-backed subscriber there.
//!
//! ## Example
//!
//! ```rust
//! # use doran_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder()
//!     .name("doran")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod builder;
mod error;

pub use crate::builder::{ConsoleFormat, LoggerBuilder, NoFile, NoName, WithFile, WithName};
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use tracing_appender::non_blocking::WorkerGuard;

/// Handle to the installed logging system.
///
/// Holds the non-blocking file writer guard, if any. Keep it alive until shutdown.
#[must_use = "Dropping this handle stops the background log writer."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber.
    ///
    /// The name is required before [`LoggerBuilder::init`] becomes available and is
    /// used as the log file prefix (`doran.2026-10-16.log`).
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub(crate) const fn new(guard: Option<WorkerGuard>) -> Self {
        Self { guard }
    }

    /// Returns `true` when a file writer is attached.
    #[must_use]
    pub const fn writes_to_file(&self) -> bool {
        self.guard.is_some()
    }

    /// Returns the file writer guard, if present.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logger shutting down, flushing file writer");
        }
    }
}
