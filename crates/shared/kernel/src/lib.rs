//! Kernel utilities shared by the Doran entry points.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use doran_domain::config::BootstrapConfig;
//! use doran_kernel::config::ConfigLoader;
//!
//! let cfg: BootstrapConfig = ConfigLoader::new().file("doran.toml").load()?;
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use doran_domain as domain;
