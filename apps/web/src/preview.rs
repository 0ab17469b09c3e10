use crate::assets::STYLESHEET;
use clap::Parser;
use doran_bootstrap::memory::{MemoryDocument, VNode};
use doran_bootstrap::{BootstrapError, Bootstrapper, Component};
use doran_domain::config::BootstrapConfig;
use doran_kernel::config::load_config;
use doran_logger::{LevelFilter, Logger};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Headless preview of the Doran UI bootstrap.
#[derive(Debug, Parser)]
#[command(name = "doran", version, about)]
struct Args {
    /// Configuration file; defaults to `doran.{toml,json,yaml}` when present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the configured mount point id.
    #[arg(long)]
    mount_id: Option<String>,

    /// Leaves the mount point out of the document.
    #[arg(long)]
    no_mount: bool,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Static stand-in for the browser component tree.
#[derive(Debug)]
struct PreviewShell {
    title: String,
    stylesheet: bool,
}

impl PreviewShell {
    fn new(config: &BootstrapConfig) -> Self {
        Self { title: config.title.clone(), stylesheet: config.stylesheet }
    }
}

impl Component for PreviewShell {
    type Output = VNode;

    fn render(&self) -> VNode {
        let wire = VNode::element("div")
            .attr("class", "wire")
            .child(VNode::element("h1").child(VNode::text(&self.title)))
            .child(VNode::element("main"));

        let fragment = VNode::element("div").attr("data-doran", "shell");
        let fragment = if self.stylesheet {
            fragment.child(VNode::element("style").child(VNode::text(STYLESHEET)))
        } else {
            fragment
        };
        fragment.child(wire)
    }
}

pub(crate) fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    let _logger =
        Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).level(args.log_level).init()?;

    let mut config: BootstrapConfig = load_config(args.config.as_ref())?;
    if let Some(mount_id) = args.mount_id {
        config.mount_id = mount_id;
    }
    debug!(?config, "Preview configuration");

    let html = render_document(config, !args.no_mount)?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{html}")?;

    Ok(())
}

/// Bootstraps into a fresh in-memory page and returns its HTML.
fn render_document(config: BootstrapConfig, with_mount: bool) -> Result<String, BootstrapError> {
    let document = if with_mount {
        MemoryDocument::with_mount_point(&config.mount_id)
    } else {
        MemoryDocument::new()
    };

    let shell = PreviewShell::new(&config);
    Bootstrapper::new(document.clone(), shell).config(config).start()?;

    Ok(document.to_html())
}
