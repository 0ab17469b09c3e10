use doran_derive::doran_error;
use std::borrow::Cow;

#[doran_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing element '{id}'{}", format_context(.context))]
    Missing { id: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("boom")).context("reading fixture")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.to_string(), "IO error (reading fixture): boom");

    let err: DemoError = "fault".into();
    assert!(matches!(err, DemoError::Internal { .. }));

    let missing: Result<(), DemoError> =
        Err(DemoError::Missing { id: "root".into(), context: None });
    let err = missing.context("lookup").unwrap_err();
    assert_eq!(err.to_string(), "Missing element 'root' (lookup)");
}
