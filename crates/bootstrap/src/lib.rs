//! # Bootstrap
//!
//! Hands a UI over from its host environment to the rendering framework, once.
//!
//! The host is injected through [`HostDocument`], which makes the whole
//! sequence testable against [`memory::MemoryDocument`]:
//!
//! 1. validate the configured mount id (`"root"` by default);
//! 2. look the element up, failing with [`BootstrapError::MountPointNotFound`];
//! 3. create a render root bound to it;
//! 4. render the top-level component once, wrapped in [`StrictMode`].
//!
//! ## Example
//!
//! ```rust
//! use doran_bootstrap::memory::{MemoryDocument, VNode};
//! use doran_bootstrap::{Bootstrapper, from_fn};
//!
//! let document = MemoryDocument::with_mount_point("root");
//! let app = from_fn(|| VNode::element("main"));
//!
//! let mounted = Bootstrapper::new(document.clone(), app).start().unwrap();
//! assert_eq!(mounted.mount_id(), "root");
//! assert_eq!(document.render_count(), 1);
//! ```

mod bootstrapper;
mod error;
mod host;
pub mod memory;
mod mount;
mod strict;

pub use crate::bootstrapper::{Bootstrapper, Mounted};
pub use crate::error::{BootstrapError, BootstrapErrorExt};
pub use crate::host::{Component, FnComponent, HostDocument, RenderRoot, from_fn};
pub use crate::mount::{MountPoint, validate_mount_id};
pub use crate::strict::{ImpurityLog, StrictMode};
pub use doran_domain::config::{BootstrapConfig, StrictModePolicy};
