//! `doran`: mounts the Doran UI.
//!
//! On `wasm32` the UI is mounted into the browser page through Dioxus. On
//! native targets the same bootstrap runs against an in-memory document and
//! the result is printed as HTML.

mod assets;
#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(not(target_arch = "wasm32"))]
mod preview;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
fn main() -> anyhow::Result<()> {
    // stderr goes nowhere in the browser.
    web::run().inspect_err(|err| tracing::error!("Startup failed: {err:#}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    preview::run()
}
