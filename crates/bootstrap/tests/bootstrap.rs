use doran_bootstrap::memory::{MemoryDocument, MemoryRoot, VNode};
use doran_bootstrap::{
    BootstrapConfig, BootstrapError, Bootstrapper, HostDocument, ImpurityLog, RenderRoot,
    StrictModePolicy, from_fn,
};
use std::cell::Cell;

fn shell() -> VNode {
    VNode::element("div")
        .attr("class", "wire")
        .child(VNode::element("h1").child(VNode::text("Doran MVP")))
        .child(VNode::element("main"))
}

fn strict(policy: StrictModePolicy) -> BootstrapConfig {
    BootstrapConfig { strict_mode: policy, ..BootstrapConfig::default() }
}

#[test]
fn present_mount_point_renders_exactly_once() {
    let document = MemoryDocument::with_mount_point("root");

    let mounted = Bootstrapper::new(document.clone(), from_fn(shell))
        .start()
        .expect("mount point exists");

    assert_eq!(document.render_count(), 1);
    assert_eq!(mounted.mount_id(), "root");
}

#[test]
fn absent_mount_point_is_fatal_and_renders_nothing() {
    let document = MemoryDocument::new();
    let before = document.to_html();
    let calls = Cell::new(0);

    let err = Bootstrapper::new(
        document.clone(),
        from_fn(|| {
            calls.set(calls.get() + 1);
            shell()
        }),
    )
    .start()
    .expect_err("lookup must fail");

    assert!(matches!(&err, BootstrapError::MountPointNotFound { id, .. } if id == "root"));
    assert_eq!(err.to_string(), "Mount point '#root' not found in the host document");
    assert_eq!(document.render_count(), 0);
    assert_eq!(calls.get(), 0, "the component must not run");
    assert_eq!(document.to_html(), before, "document must stay unmodified");
}

#[test]
fn mount_point_gets_exactly_one_child_subtree() {
    let document = MemoryDocument::with_mount_point("root");

    let mounted = Bootstrapper::new(document.clone(), from_fn(|| VNode::element("div")))
        .start()
        .expect("mount point exists");

    let mount = mounted.root().mount();
    assert_eq!(document.children(mount).len(), 1);
    assert_eq!(
        document.to_html(),
        "<html><body><div id=\"root\"><div></div></div></body></html>"
    );
}

#[test]
fn strict_wrapper_produces_the_same_nodes_as_direct_rendering() {
    let wrapped = MemoryDocument::with_mount_point("root");
    Bootstrapper::new(wrapped.clone(), from_fn(shell))
        .config(strict(StrictModePolicy::Always))
        .start()
        .expect("mount point exists");

    let direct = MemoryDocument::with_mount_point("root");
    let mount = direct.element_by_id("root").expect("mount point exists");
    let mut root: MemoryRoot = direct.create_root(mount);
    root.render(from_fn(shell));

    assert_eq!(wrapped.to_html(), direct.to_html());
    assert_eq!(wrapped.node_count(), direct.node_count());
}

#[test]
fn strict_checks_double_invoke_the_component() {
    let document = MemoryDocument::with_mount_point("root");
    let calls = Cell::new(0);

    let mounted = Bootstrapper::new(
        document.clone(),
        from_fn(|| {
            calls.set(calls.get() + 1);
            shell()
        }),
    )
    .config(strict(StrictModePolicy::Always))
    .start()
    .expect("mount point exists");

    assert!(mounted.strict_checks());
    assert_eq!(calls.get(), 2);
    assert_eq!(document.render_count(), 1, "the extra invocation is never committed");
}

#[test]
fn disabled_strict_checks_invoke_the_component_once() {
    let document = MemoryDocument::with_mount_point("root");
    let calls = Cell::new(0);

    let mounted = Bootstrapper::new(
        document,
        from_fn(|| {
            calls.set(calls.get() + 1);
            shell()
        }),
    )
    .config(strict(StrictModePolicy::Never))
    .start()
    .expect("mount point exists");

    assert!(!mounted.strict_checks());
    assert_eq!(calls.get(), 1);
}

#[test]
fn impure_component_is_reported_and_last_render_is_committed() {
    let document = MemoryDocument::with_mount_point("root");
    let log = ImpurityLog::new();
    let calls = Cell::new(0);

    Bootstrapper::new(
        document.clone(),
        from_fn(|| {
            calls.set(calls.get() + 1);
            VNode::element("p").child(VNode::text(calls.get().to_string()))
        }),
    )
    .config(strict(StrictModePolicy::Always))
    .impurity_log(log.clone())
    .start()
    .expect("mount point exists");

    assert_eq!(log.count(), 1);
    assert!(document.to_html().contains("<p>2</p>"));
}

#[test]
fn configured_mount_id_is_used() {
    let document = MemoryDocument::with_mount_point("app");
    let config = BootstrapConfig { mount_id: "app".to_owned(), ..BootstrapConfig::default() };

    let mounted = Bootstrapper::new(document.clone(), from_fn(shell))
        .config(config)
        .start()
        .expect("custom mount point exists");

    assert_eq!(mounted.mount_id(), "app");
    assert_eq!(document.render_count(), 1);
}

#[test]
fn invalid_mount_id_fails_before_lookup() {
    let document = MemoryDocument::with_mount_point("root");
    let config = BootstrapConfig { mount_id: String::new(), ..BootstrapConfig::default() };

    let err = Bootstrapper::new(document.clone(), from_fn(shell))
        .config(config)
        .start()
        .expect_err("empty mount id must be rejected");

    assert!(matches!(err, BootstrapError::InvalidConfiguration { .. }));
    assert_eq!(document.render_count(), 0);
}

/// Host whose roots write to the host as soon as they render, like a page title.
#[derive(Debug, Default)]
struct TitledHost {
    has_mount: bool,
    title: std::rc::Rc<Cell<Option<&'static str>>>,
}

#[derive(Debug)]
struct TitledRoot(std::rc::Rc<Cell<Option<&'static str>>>);

impl HostDocument for TitledHost {
    type Mount = ();
    type Root = TitledRoot;

    fn element_by_id(&self, _id: &str) -> Option<()> {
        self.has_mount.then_some(())
    }

    fn create_root(&self, (): ()) -> TitledRoot {
        TitledRoot(self.title.clone())
    }
}

impl<T> RenderRoot<T> for TitledRoot {
    fn render(&mut self, _tree: T) {
        self.0.set(Some("Doran MVP"));
    }
}

#[test]
fn host_side_writes_happen_only_after_a_successful_lookup() {
    let missing = TitledHost::default();
    let title = missing.title.clone();
    let result = Bootstrapper::new(missing, from_fn(shell)).start().map(|_| ());
    assert!(matches!(result, Err(BootstrapError::MountPointNotFound { .. })));
    assert_eq!(title.get(), None, "the host must stay untouched");

    let present = TitledHost { has_mount: true, ..TitledHost::default() };
    let title = present.title.clone();
    let mounted = Bootstrapper::new(present, from_fn(shell)).start().expect("mount point exists");
    assert_eq!(title.get(), Some("Doran MVP"));
    assert_eq!(mounted.root().0.get(), Some("Doran MVP"));
}
