use crate::error::BootstrapError;
use crate::host::HostDocument;
use tracing::debug;

/// A host element found by `id`, ready to receive the UI tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint<M> {
    id: String,
    handle: M,
}

impl<M> MountPoint<M> {
    /// Looks up `id` in `host`.
    ///
    /// # Errors
    /// [`BootstrapError::MountPointNotFound`] when no such element exists.
    pub fn locate<H>(host: &H, id: &str) -> Result<Self, BootstrapError>
    where
        H: HostDocument<Mount = M>,
    {
        debug!(mount_id = id, "Looking up mount point");

        host.element_by_id(id).map(|handle| Self { id: id.to_owned(), handle }).ok_or_else(|| {
            BootstrapError::MountPointNotFound { id: id.to_owned().into(), context: None }
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn handle(&self) -> &M {
        &self.handle
    }

    pub fn into_handle(self) -> M {
        self.handle
    }
}

/// Checks that `id` can name a host element.
///
/// # Errors
/// [`BootstrapError::InvalidConfiguration`] for an empty id or one containing whitespace.
pub fn validate_mount_id(id: &str) -> Result<(), BootstrapError> {
    if id.is_empty() {
        return Err(BootstrapError::InvalidConfiguration {
            message: "mount id cannot be empty".into(),
            context: None,
        });
    }

    if id.chars().any(char::is_whitespace) {
        return Err(BootstrapError::InvalidConfiguration {
            message: format!("mount id '{id}' must not contain whitespace").into(),
            context: None,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_ids() {
        assert!(validate_mount_id("root").is_ok());
        assert!(validate_mount_id("app-shell_2").is_ok());
    }

    #[test]
    fn rejects_empty_and_spaced_ids() {
        assert!(matches!(
            validate_mount_id(""),
            Err(BootstrapError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            validate_mount_id("my root"),
            Err(BootstrapError::InvalidConfiguration { .. })
        ));
    }
}
