use doran_bootstrap::memory::{MemoryDocument, VNode};
use doran_bootstrap::{BootstrapConfig, Bootstrapper, from_fn};
use std::io;
use std::sync::{Arc, Mutex};
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().expect("capture lock").clone()).expect("utf-8 log output")
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("capture lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with a scoped subscriber and returns everything it logged.
fn capture(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn successful_mount_is_logged_inside_the_bootstrap_span() {
    let logs = capture(|| {
        Bootstrapper::new(MemoryDocument::with_mount_point("root"), from_fn(|| VNode::element("main")))
            .start()
            .expect("mount point exists");
    });

    assert!(logs.contains("bootstrap{mount_id=root}"), "{logs}");
    assert!(logs.contains("Looking up mount point"), "{logs}");
    assert!(logs.contains("INFO") && logs.contains("UI tree mounted"), "{logs}");
    assert!(!logs.contains("ERROR"), "{logs}");
}

#[test]
fn missing_mount_point_logs_an_error() {
    let logs = capture(|| {
        Bootstrapper::new(MemoryDocument::new(), from_fn(|| VNode::element("main")))
            .start()
            .expect_err("lookup must fail");
    });

    assert!(logs.contains("ERROR") && logs.contains("Startup aborted"), "{logs}");
    assert!(logs.contains("Mount point '#root' not found"), "{logs}");
    assert!(!logs.contains("UI tree mounted"), "{logs}");
}

#[test]
fn rejected_configuration_logs_an_error() {
    let config = BootstrapConfig { mount_id: "my root".to_owned(), ..BootstrapConfig::default() };

    let logs = capture(|| {
        Bootstrapper::new(MemoryDocument::with_mount_point("root"), from_fn(|| VNode::element("main")))
            .config(config)
            .start()
            .expect_err("spaced mount id must be rejected");
    });

    assert!(logs.contains("ERROR") && logs.contains("Startup aborted"), "{logs}");
    assert!(logs.contains("must not contain whitespace"), "{logs}");
    assert!(!logs.contains("Looking up mount point"), "{logs}");
}
