use crate::error::BootstrapError;
use crate::host::{HostDocument, RenderRoot};
use crate::mount::{MountPoint, validate_mount_id};
use crate::strict::{ImpurityLog, StrictMode};
use doran_domain::config::BootstrapConfig;
use tracing::{error, info, info_span};

/// One-shot handoff from the host environment to the UI framework.
///
/// Owns the host, the top-level component and the settings. [`Bootstrapper::start`]
/// consumes it, so a process that builds one bootstrapper mounts at most once.
#[derive(Debug)]
pub struct Bootstrapper<H, C> {
    host: H,
    app: C,
    config: BootstrapConfig,
    impurities: ImpurityLog,
}

impl<H, C> Bootstrapper<H, C>
where
    H: HostDocument,
{
    /// Uses the default settings: mount under `#root`, strict checks in debug builds.
    pub fn new(host: H, app: C) -> Self {
        Self { host, app, config: BootstrapConfig::default(), impurities: ImpurityLog::default() }
    }

    #[must_use]
    pub fn config(mut self, config: BootstrapConfig) -> Self {
        self.config = config;
        self
    }

    /// Collects strict-mode impurity reports into `log`.
    #[must_use]
    pub fn impurity_log(mut self, log: ImpurityLog) -> Self {
        self.impurities = log;
        self
    }

    /// Locates the mount point, binds a render root to it and renders the
    /// top-level component once inside [`StrictMode`].
    ///
    /// Nothing touches the host document unless the lookup succeeds.
    ///
    /// # Errors
    /// * [`BootstrapError::InvalidConfiguration`] when the mount id cannot name an element.
    /// * [`BootstrapError::MountPointNotFound`] when the host has no such element.
    pub fn start(self) -> Result<Mounted<H::Root>, BootstrapError>
    where
        H::Root: RenderRoot<StrictMode<C>>,
    {
        let Self { host, app, config, impurities } = self;
        let span = info_span!("bootstrap", mount_id = %config.mount_id);
        let _entered = span.enter();

        let mount = validate_mount_id(&config.mount_id)
            .and_then(|()| MountPoint::locate(&host, &config.mount_id))
            .inspect_err(|err| error!(%err, "Startup aborted"))?;

        let strict = config.strict_mode.is_enabled();
        let mut root = host.create_root(mount.into_handle());
        root.render(StrictMode::new(app).checks(strict).with_log(impurities));

        info!(strict, "UI tree mounted");

        Ok(Mounted { root, mount_id: config.mount_id, strict })
    }
}

/// A mounted UI: the render root now belongs to the framework's update loop.
#[derive(Debug)]
pub struct Mounted<R> {
    root: R,
    mount_id: String,
    strict: bool,
}

impl<R> Mounted<R> {
    #[must_use]
    pub const fn root(&self) -> &R {
        &self.root
    }

    pub const fn root_mut(&mut self) -> &mut R {
        &mut self.root
    }

    pub fn into_root(self) -> R {
        self.root
    }

    #[must_use]
    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    /// Whether strict-mode checks ran during the initial render.
    #[must_use]
    pub const fn strict_checks(&self) -> bool {
        self.strict
    }
}
