use std::borrow::Cow;

/// Startup failures. None of them is recoverable: the caller aborts startup.
#[doran_derive::doran_error]
pub enum BootstrapError {
    /// No element with the configured `id` exists in the host document.
    #[error("Mount point '#{id}' not found in the host document{}", format_context(.context))]
    MountPointNotFound { id: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid bootstrap configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
