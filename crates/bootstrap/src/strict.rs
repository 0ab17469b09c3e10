//! Development-time render checks.
//!
//! [`StrictMode`] contributes no output of its own. With checks enabled it
//! renders the wrapped component twice and keeps the second result, so a
//! component whose output depends on hidden mutable state shows up as an
//! impurity instead of a heisenbug.

use crate::host::Component;
use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;
use tracing::{debug, warn};

/// Shared counter of renders whose repeated invocation disagreed.
#[derive(Debug, Clone, Default)]
pub struct ImpurityLog(Rc<Cell<usize>>);

impl ImpurityLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.0.get()
    }

    fn record(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Transparent wrapper that double-renders its child when checks are on.
#[derive(Debug)]
pub struct StrictMode<C> {
    inner: C,
    checks: bool,
    log: ImpurityLog,
}

impl<C> StrictMode<C> {
    /// Wraps `inner`; checks default to on in debug builds.
    pub fn new(inner: C) -> Self {
        Self { inner, checks: cfg!(debug_assertions), log: ImpurityLog::default() }
    }

    #[must_use]
    pub const fn checks(mut self, enabled: bool) -> Self {
        self.checks = enabled;
        self
    }

    /// Reports impurities into `log` instead of a private counter.
    #[must_use]
    pub fn with_log(mut self, log: ImpurityLog) -> Self {
        self.log = log;
        self
    }

    #[must_use]
    pub const fn checks_enabled(&self) -> bool {
        self.checks
    }

    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    #[must_use]
    pub fn impurities(&self) -> usize {
        self.log.count()
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Component> StrictMode<C> {
    /// Applies the double invocation without comparing the two outputs.
    ///
    /// Meant for outputs with no structural equality, such as framework element
    /// handles. Side effects in the component body still run twice, but nothing
    /// is recorded in the [`ImpurityLog`].
    pub fn render_uncompared(&self) -> C::Output {
        if self.checks {
            let _ = self.inner.render();
        }
        self.inner.render()
    }
}

impl<C> Component for StrictMode<C>
where
    C: Component,
    C::Output: PartialEq + Debug,
{
    type Output = C::Output;

    fn render(&self) -> C::Output {
        if !self.checks {
            return self.inner.render();
        }

        // The first pass only exists to be compared against.
        let probe = self.inner.render();
        let output = self.inner.render();

        if probe != output {
            self.log.record();
            debug!(?probe, ?output, "Diverging render outputs");
            warn!(
                impurities = self.log.count(),
                "Component rendered different output on repeated invocation"
            );
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::from_fn;

    #[test]
    fn pure_component_renders_twice_without_impurity() {
        let calls = Cell::new(0);
        let strict = StrictMode::new(from_fn(|| {
            calls.set(calls.get() + 1);
            "same"
        }))
        .checks(true);

        assert_eq!(strict.render(), "same");
        assert_eq!(calls.get(), 2);
        assert_eq!(strict.impurities(), 0);
    }

    #[test]
    fn impure_component_is_recorded() {
        let calls = Cell::new(0);
        let log = ImpurityLog::new();
        let strict = StrictMode::new(from_fn(|| {
            calls.set(calls.get() + 1);
            calls.get()
        }))
        .checks(true)
        .with_log(log.clone());

        assert_eq!(strict.render(), 2, "second invocation wins");
        assert_eq!(log.count(), 1);
    }

    #[test]
    fn disabled_checks_render_once() {
        let calls = Cell::new(0);
        let strict = StrictMode::new(from_fn(|| {
            calls.set(calls.get() + 1);
            calls.get()
        }))
        .checks(false);

        assert_eq!(strict.render(), 1);
        assert_eq!(calls.get(), 1);
        assert_eq!(strict.impurities(), 0);
    }

    #[test]
    fn uncompared_render_still_invokes_twice_and_keeps_the_second_output() {
        let calls = Cell::new(0);
        let strict = StrictMode::new(from_fn(|| {
            calls.set(calls.get() + 1);
            calls.get()
        }))
        .checks(true);

        assert_eq!(strict.render_uncompared(), 2);
        assert_eq!(calls.get(), 2);
        assert_eq!(strict.impurities(), 0, "outputs are not compared");

        let once = StrictMode::new(from_fn(|| calls.get())).checks(false);
        assert_eq!(once.render_uncompared(), 2);
    }

    #[test]
    fn default_checks_follow_build_profile() {
        let strict = StrictMode::new(from_fn(|| ()));
        assert_eq!(strict.checks_enabled(), cfg!(debug_assertions));
    }
}
