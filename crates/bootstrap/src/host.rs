use std::fmt;

/// A renderable unit with no required inputs.
pub trait Component {
    /// What the render root consumes: a node tree, a framework entry point, ...
    type Output;

    fn render(&self) -> Self::Output;
}

/// The environment the UI attaches to.
pub trait HostDocument {
    /// Handle to an element owned by the host.
    type Mount;
    /// Framework binding created for a mount handle.
    type Root;

    fn element_by_id(&self, id: &str) -> Option<Self::Mount>;

    fn create_root(&self, mount: Self::Mount) -> Self::Root;
}

/// Render capability of a root bound to a mount point.
pub trait RenderRoot<T> {
    fn render(&mut self, tree: T);
}

/// Adapts a closure into a [`Component`].
#[derive(Clone, Copy)]
pub struct FnComponent<F>(F);

/// Wraps `render` as a [`Component`].
pub const fn from_fn<F, O>(render: F) -> FnComponent<F>
where
    F: Fn() -> O,
{
    FnComponent(render)
}

impl<F, O> Component for FnComponent<F>
where
    F: Fn() -> O,
{
    type Output = O;

    fn render(&self) -> O {
        (self.0)()
    }
}

impl<F> fmt::Debug for FnComponent<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComponent").finish_non_exhaustive()
    }
}
