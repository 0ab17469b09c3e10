use crate::app::DoranMvpWire;
use anyhow::Context;
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use dioxus::web::Config;
use doran_bootstrap::{Bootstrapper, Component, HostDocument, RenderRoot, StrictMode};
use doran_domain::config::BootstrapConfig;
use tracing::info;

/// The browser page as a host document.
#[derive(Debug)]
pub(crate) struct WebHost {
    document: web_sys::Document,
    config: BootstrapConfig,
}

impl WebHost {
    fn current(config: BootstrapConfig) -> anyhow::Result<Self> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .context("No browser document available")?;
        Ok(Self { document, config })
    }
}

impl HostDocument for WebHost {
    type Mount = web_sys::Element;
    type Root = WebRoot;

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id)
    }

    fn create_root(&self, mount: web_sys::Element) -> WebRoot {
        WebRoot { document: self.document.clone(), mount, config: self.config.clone() }
    }
}

/// Dioxus web renderer bound to one page element.
///
/// The page is only touched from [`RenderRoot::render`], i.e. after the
/// mount point was found.
#[derive(Debug)]
pub(crate) struct WebRoot {
    document: web_sys::Document,
    mount: web_sys::Element,
    config: BootstrapConfig,
}

impl RenderRoot<StrictMode<WebApp>> for WebRoot {
    fn render(&mut self, tree: StrictMode<WebApp>) {
        self.document.set_title(&self.config.title);

        LaunchBuilder::web()
            .with_cfg(Config::new().rootelement(self.mount.clone()))
            .with_context(self.config.clone())
            .with_context(StrictEntry { app: *tree.inner(), checks: tree.checks_enabled() })
            .launch(StrictRoot);
    }
}

/// The top-level component body, run by Dioxus on every render of [`StrictRoot`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct WebApp {
    body: fn() -> Element,
}

impl Component for WebApp {
    type Output = Element;

    fn render(&self) -> Element {
        (self.body)()
    }
}

/// What [`StrictRoot`] renders, shared through the Dioxus context.
#[derive(Debug, Clone, Copy)]
struct StrictEntry {
    app: WebApp,
    checks: bool,
}

/// Dioxus root that renders [`WebApp`] under the strict-mode policy.
///
/// Elements have no structural equality, so the second pass is kept without
/// comparing it to the first.
#[component]
fn StrictRoot() -> Element {
    let entry = use_context::<StrictEntry>();
    StrictMode::new(entry.app).checks(entry.checks).render_uncompared()
}

pub(crate) fn run() -> anyhow::Result<()> {
    console_error_panic_hook::set_once();
    dioxus::logger::init(if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO })?;

    let config = BootstrapConfig::default();
    let host = WebHost::current(config.clone())?;

    let mounted = Bootstrapper::new(host, WebApp { body: DoranMvpWire }).config(config).start()?;
    info!(mount_id = mounted.mount_id(), strict = mounted.strict_checks(), "Handed control to Dioxus");

    Ok(())
}
