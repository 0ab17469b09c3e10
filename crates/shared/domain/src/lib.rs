//! # Domain Models
//!
//! Pure configuration types shared by the bootstrap core and the app entry points.
//! Depends on `serde` only; loading and validation live elsewhere.

pub mod config;
pub mod constants;
